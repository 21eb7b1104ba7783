//! Response envelope for list endpoints.

use serde::Serialize;

use crate::query::params::{PageRequest, SortOrder};

/// A page of records with the parameters that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T, F> {
    pub data: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationInfo>,
    pub sort: SortDescriptor,
    pub filters: F,
}

/// The sort actually applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortDescriptor {
    pub by: &'static str,
    pub order: SortOrder,
}

/// Where the returned page sits in the full result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationInfo {
    /// Matching records before slicing.
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    pub pages: u64,
}

impl PaginationInfo {
    pub fn new(total: usize, request: PageRequest) -> Self {
        let total = total as u64;
        Self {
            total,
            page: request.page,
            limit: request.limit,
            pages: total.div_ceil(request.limit),
        }
    }
}

/// Slice `records` to the requested window.
pub fn paginate<T>(records: Vec<T>, request: PageRequest) -> (Vec<T>, PaginationInfo) {
    let info = PaginationInfo::new(records.len(), request);
    let limit = usize::try_from(request.limit).unwrap_or(usize::MAX);
    let page = records
        .into_iter()
        .skip(request.offset())
        .take(limit)
        .collect();
    (page, info)
}
