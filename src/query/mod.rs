//! Query pipeline for list endpoints.
//!
//! # Data Flow
//! ```text
//! raw query string (HashMap<String, String>)
//!     → params.rs (typed parsing; numeric bounds validated up front)
//!     → projects.rs / categories.rs (ProjectQuery / CategoryQuery)
//!     → apply: text search → categorical filters → numeric ranges
//!              → sort.rs → pagination (projects only)
//!     → envelope.rs (data + echoed sort/filters/pagination)
//! ```
//!
//! # Design Decisions
//! - Parsing completes before any record is touched, so a bad bound never
//!   produces a partially filtered result
//! - Unknown sort fields and orders fall back to resource defaults
//! - The pipeline consumes a snapshot and never mutates stored records

pub mod categories;
pub mod envelope;
pub mod params;
pub mod projects;
pub mod sort;

pub use categories::{CategoryFilters, CategoryQuery, CategorySortField};
pub use envelope::{Envelope, PaginationInfo, SortDescriptor};
pub use params::{NumericRange, PageRequest, RawQuery, SortOrder};
pub use projects::{ProjectFilters, ProjectQuery, ProjectSortField};

/// Case-insensitive substring match of `needle` (already lower-cased) in any field.
pub(crate) fn matches_text<'a>(
    needle: &str,
    fields: impl IntoIterator<Item = Option<&'a str>>,
) -> bool {
    fields
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}
