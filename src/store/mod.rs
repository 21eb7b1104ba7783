//! In-memory collection store.
//!
//! # Design Decisions
//! - One [`Collection`] per resource type, owned by the application state
//!   and shared via `Arc`; tests build their own isolated instances
//! - Identifier assignment and append happen under a single write lock
//! - Readers receive clones, never references into the store

pub mod collection;
pub mod seed;

pub use collection::{Collection, Record, StoreError};
