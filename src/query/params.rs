//! Typed parsing of raw query-string values.

use std::collections::HashMap;

use serde::Serialize;

use crate::api::errors::ApiError;

/// Query parameters exactly as received.
pub type RawQuery = HashMap<String, String>;

pub const INVALID_NUMERIC_FILTER: &str = "Invalid numeric filter provided";

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 50;
pub const MAX_LIMIT: u64 = 100;

/// Parse a decimal number the way loosely typed clients send it.
///
/// Surrounding whitespace is ignored and an empty value counts as zero.
/// `NaN`, the textual infinities and hex/binary/octal literals are rejected.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    // f64::from_str also takes "inf"/"nan" spellings
    if trimmed.chars().any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Parse the leading integer of `raw` ("12abc" → 12), if there is one.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    // Saturate rather than fail on absurdly long digit runs
    let value = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// Non-empty parameter value.
pub fn text_param(raw: &RawQuery, key: &str) -> Option<String> {
    raw.get(key).filter(|v| !v.is_empty()).cloned()
}

/// Split a comma-separated list into trimmed, lower-cased values.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.to_lowercase().split(',').map(|s| s.trim().to_string()).collect()
}

/// Inclusive numeric bounds. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumericRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericRange {
    /// Read `min_key`/`max_key` from the query. Any bound that is present
    /// but not a number fails the whole request.
    pub fn parse(raw: &RawQuery, min_key: &str, max_key: &str) -> Result<Self, ApiError> {
        let bound = |key: &str| -> Result<Option<f64>, ApiError> {
            raw.get(key)
                .map(|v| {
                    parse_number(v)
                        .ok_or_else(|| ApiError::Validation(INVALID_NUMERIC_FILTER.into()))
                })
                .transpose()
        };
        Ok(Self {
            min: bound(min_key)?,
            max: bound(max_key)?,
        })
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// `asc`/`desc` in any case; anything else yields `default`.
    pub fn parse(raw: Option<&str>, default: SortOrder) -> Self {
        match raw.map(str::to_lowercase).as_deref() {
            Some("asc") => SortOrder::Asc,
            Some("desc") => SortOrder::Desc,
            _ => default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Requested page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Zero, missing or non-numeric values take the defaults; the results are
    /// then clamped to `page >= 1` and `1 <= limit <= 100`.
    pub fn parse(raw: &RawQuery) -> Self {
        let read = |key: &str, default: u64| -> i64 {
            raw.get(key)
                .and_then(|v| parse_leading_int(v))
                .filter(|n| *n != 0)
                .unwrap_or(default as i64)
        };
        let page = read("page", DEFAULT_PAGE).max(1) as u64;
        let limit = read("limit", DEFAULT_LIMIT).clamp(1, MAX_LIMIT as i64) as u64;
        Self { page, limit }
    }

    pub fn offset(&self) -> usize {
        usize::try_from((self.page - 1).saturating_mul(self.limit)).unwrap_or(usize::MAX)
    }
}
