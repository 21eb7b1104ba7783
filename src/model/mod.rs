//! Record types for the two collections and their create payloads.
//!
//! Create payloads arrive loosely typed: numeric fields may be JSON numbers
//! or numeric strings. [`coerce_number`] turns either into an `f64` and
//! rejects everything else, so callers decide between defaulting and failing.

pub mod category;
pub mod project;

pub use category::{Category, NewCategory};
pub use project::{NewProject, Project, ProjectStatus};

use serde_json::Value;

use crate::query::params::parse_number;

/// Numeric value of a JSON field, or `None` if it isn't a finite number.
///
/// Numeric strings are accepted with the same rules as query-string bounds.
pub fn coerce_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => parse_number(s)?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Non-negative whole count, or 0 when the input is absent or unusable.
pub(crate) fn count_or_zero(value: Option<&Value>) -> u64 {
    value
        .and_then(coerce_number)
        .filter(|n| *n >= 0.0)
        .map(|n| n as u64)
        .unwrap_or(0)
}

/// Present when the field exists and holds a non-empty string.
pub(crate) fn non_empty(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&json!(12.5)), Some(12.5));
        assert_eq!(coerce_number(&json!("42")), Some(42.0));
        assert_eq!(coerce_number(&json!(" 7 ")), Some(7.0));
        assert_eq!(coerce_number(&json!("abc")), None);
        assert_eq!(coerce_number(&json!(true)), None);
        assert_eq!(coerce_number(&json!([1])), None);
        assert_eq!(coerce_number(&json!("Infinity")), None);
    }

    #[test]
    fn test_count_or_zero() {
        assert_eq!(count_or_zero(Some(&json!(234))), 234);
        assert_eq!(count_or_zero(Some(&json!("15"))), 15);
        assert_eq!(count_or_zero(Some(&json!("lots"))), 0);
        assert_eq!(count_or_zero(Some(&json!(-3))), 0);
        assert_eq!(count_or_zero(None), 0);
    }
}
