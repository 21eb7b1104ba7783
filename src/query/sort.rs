//! Record ordering.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::query::params::SortOrder;

/// A comparable field value extracted from a record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Text(&'a str),
    Number(f64),
    Time(DateTime<Utc>),
}

/// Primary collation key: decomposed, combining marks dropped, lower-cased.
fn base_letters(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Locale-style text order: base letters, then accents, then case
/// (lower case first).
pub fn compare_text(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Compare two present values.
pub fn compare_values(a: &SortValue<'_>, b: &SortValue<'_>) -> Ordering {
    match (a, b) {
        (SortValue::Text(a), SortValue::Text(b)) => compare_text(a, b),
        (SortValue::Number(a), SortValue::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (SortValue::Time(a), SortValue::Time(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

/// Stable sort by `key` in `order`. Records whose key is missing always come
/// last, whichever direction is requested.
pub fn sort_records<T, F>(records: &mut [T], order: SortOrder, key: F)
where
    F: for<'r> Fn(&'r T) -> Option<SortValue<'r>>,
{
    records.sort_by(|a, b| match (key(a), key(b)) {
        (Some(va), Some(vb)) => {
            let ordering = compare_values(&va, &vb);
            match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Row {
        name: &'static str,
        score: Option<f64>,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "beta", score: Some(100.0) },
            Row { name: "Alpha", score: None },
            Row { name: "gamma", score: Some(50.0) },
            Row { name: "alpha", score: Some(75.0) },
        ]
    }

    fn names(rows: &[Row]) -> Vec<&'static str> {
        rows.iter().map(|r| r.name).collect()
    }

    #[test]
    fn test_numeric_both_directions_missing_last() {
        let mut data = rows();
        sort_records(&mut data, SortOrder::Asc, |r| r.score.map(SortValue::Number));
        assert_eq!(names(&data), vec!["gamma", "alpha", "beta", "Alpha"]);

        sort_records(&mut data, SortOrder::Desc, |r| r.score.map(SortValue::Number));
        assert_eq!(names(&data), vec!["beta", "alpha", "gamma", "Alpha"]);
    }

    #[test]
    fn test_text_is_case_insensitive() {
        let mut data = rows();
        sort_records(&mut data, SortOrder::Asc, |r| Some(SortValue::Text(r.name)));
        assert_eq!(names(&data), vec!["alpha", "Alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_accented_text_sorts_beside_base_letter() {
        let mut titles = vec!["Zoology", "Économie", "Law", "éthique"];
        titles.sort_by(|a, b| compare_text(a, b));
        assert_eq!(titles, vec!["Économie", "éthique", "Law", "Zoology"]);

        assert_eq!(compare_text("resume", "résumé"), Ordering::Less);
        assert_eq!(compare_text("cote", "Cote"), Ordering::Less);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut data = vec![
            Row { name: "first", score: Some(1.0) },
            Row { name: "second", score: Some(1.0) },
        ];
        sort_records(&mut data, SortOrder::Desc, |r| r.score.map(SortValue::Number));
        assert_eq!(names(&data), vec!["first", "second"]);
    }
}
