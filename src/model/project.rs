//! Project records: theses, dissertations and similar academic work.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::errors::ApiError;
use crate::model::{coerce_number, count_or_zero, non_empty};
use crate::store::Record;

/// Publication state of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ProjectStatus {
    Published,
    #[default]
    Unpublished,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Published => "Published",
            ProjectStatus::Unpublished => "Unpublished",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "published" => Ok(ProjectStatus::Published),
            "unpublished" => Ok(ProjectStatus::Unpublished),
            _ => Err(ApiError::Validation(
                "status must be Published or Unpublished".into(),
            )),
        }
    }
}

/// A stored project.
///
/// Optional descriptive fields are omitted from JSON when unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    pub downloads: u64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "abstract", default, skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub table_of_contents: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
}

impl Record for Project {
    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// Body of `POST /api/projects`.
///
/// Numeric fields are kept as raw JSON until validation so that numeric
/// strings are accepted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub university: Option<String>,
    pub department: Option<String>,
    pub year: Option<Value>,
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub category: Option<String>,
    pub subject: Option<String>,
    pub pages: Option<Value>,
    pub language: Option<String>,
    pub price: Option<Value>,
    pub rating: Option<Value>,
    pub downloads: Option<Value>,
    pub tags: Option<Vec<String>>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub table_of_contents: Option<Vec<String>>,
    pub upload_date: Option<String>,
    pub file_size: Option<String>,
    pub format: Option<String>,
    pub status: Option<String>,
}

impl NewProject {
    /// Validate the payload into an unsaved project stamped with `created_at`.
    ///
    /// `price` and `downloads` fall back to 0 when absent or unusable.
    /// `year`, `pages` and `rating` are optional, but a value that is present
    /// and not a number is rejected.
    pub fn into_project(self, created_at: DateTime<Utc>) -> Result<Project, ApiError> {
        if !non_empty(&self.title) || !non_empty(&self.author) || !non_empty(&self.category) {
            return Err(ApiError::Validation(
                "title, author and category are required".into(),
            ));
        }

        let year = optional_whole(self.year.as_ref(), "year")?
            .map(|n| i32::try_from(n).map_err(|_| out_of_range("year")))
            .transpose()?;
        let pages = optional_whole(self.pages.as_ref(), "pages")?
            .map(|n| u32::try_from(n).map_err(|_| out_of_range("pages")))
            .transpose()?;
        let rating = optional_number(self.rating.as_ref(), "rating")?;
        let status = self
            .status
            .as_deref()
            .map(str::parse::<ProjectStatus>)
            .transpose()?
            .unwrap_or_default();

        Ok(Project {
            id: 0,
            title: self.title.unwrap_or_default(),
            description: self.description,
            author: self.author.unwrap_or_default(),
            university: self.university,
            department: self.department,
            year,
            project_type: self.project_type,
            category: self.category.unwrap_or_default(),
            subject: self.subject,
            pages,
            language: self.language,
            price: self.price.as_ref().and_then(coerce_number).unwrap_or(0.0),
            rating,
            downloads: count_or_zero(self.downloads.as_ref()),
            tags: self.tags.unwrap_or_default(),
            abstract_text: self.abstract_text,
            table_of_contents: self.table_of_contents.unwrap_or_default(),
            upload_date: self.upload_date,
            file_size: self.file_size,
            format: self.format,
            status,
            created_at,
        })
    }
}

fn optional_number(value: Option<&Value>, field: &str) -> Result<Option<f64>, ApiError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => coerce_number(v)
            .map(Some)
            .ok_or_else(|| ApiError::Validation(format!("{field} must be a number"))),
    }
}

fn optional_whole(value: Option<&Value>, field: &str) -> Result<Option<i64>, ApiError> {
    match optional_number(value, field)? {
        Some(n) if n.fract() != 0.0 => {
            Err(ApiError::Validation(format!("{field} must be a whole number")))
        }
        Some(n) => Ok(Some(n as i64)),
        None => Ok(None),
    }
}

fn out_of_range(field: &str) -> ApiError {
    ApiError::Validation(format!("{field} is out of range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> NewProject {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_required_fields() {
        for body in [
            json!({"author": "A", "category": "Technology"}),
            json!({"title": "T", "category": "Technology"}),
            json!({"title": "T", "author": "A"}),
            json!({"title": "", "author": "A", "category": "Technology"}),
        ] {
            let err = payload(body).into_project(Utc::now()).unwrap_err();
            assert!(matches!(err, ApiError::Validation(_)));
        }
    }

    #[test]
    fn test_defaults_applied() {
        let project = payload(json!({"title": "T", "author": "A", "category": "Law"}))
            .into_project(Utc::now())
            .unwrap();
        assert_eq!(project.status, ProjectStatus::Unpublished);
        assert_eq!(project.price, 0.0);
        assert_eq!(project.downloads, 0);
        assert!(project.tags.is_empty());
        assert!(project.table_of_contents.is_empty());
        assert_eq!(project.year, None);
    }

    #[test]
    fn test_numeric_strings_accepted() {
        let project = payload(json!({
            "title": "T", "author": "A", "category": "Law",
            "price": "19.5", "downloads": "12", "year": "2022", "pages": 88, "rating": "4.5"
        }))
        .into_project(Utc::now())
        .unwrap();
        assert_eq!(project.price, 19.5);
        assert_eq!(project.downloads, 12);
        assert_eq!(project.year, Some(2022));
        assert_eq!(project.pages, Some(88));
        assert_eq!(project.rating, Some(4.5));
    }

    #[test]
    fn test_invalid_price_defaults_but_invalid_year_rejected() {
        let project = payload(json!({
            "title": "T", "author": "A", "category": "Law", "price": "free"
        }))
        .into_project(Utc::now())
        .unwrap();
        assert_eq!(project.price, 0.0);

        let err = payload(json!({
            "title": "T", "author": "A", "category": "Law", "year": "last year"
        }))
        .into_project(Utc::now())
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(msg) if msg == "year must be a number"));

        let err = payload(json!({
            "title": "T", "author": "A", "category": "Law", "pages": 12.5
        }))
        .into_project(Utc::now())
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(msg) if msg == "pages must be a whole number"));
    }

    #[test]
    fn test_status_parsing() {
        let project = payload(json!({
            "title": "T", "author": "A", "category": "Law", "status": "published"
        }))
        .into_project(Utc::now())
        .unwrap();
        assert_eq!(project.status, ProjectStatus::Published);

        let err = payload(json!({
            "title": "T", "author": "A", "category": "Law", "status": "Draft"
        }))
        .into_project(Utc::now())
        .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[test]
    fn test_serialized_shape() {
        let project = payload(json!({
            "title": "T", "author": "A", "category": "Law", "type": "Thesis", "abstract": "Summary"
        }))
        .into_project(Utc::now())
        .unwrap();
        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["type"], "Thesis");
        assert_eq!(value["abstract"], "Summary");
        assert_eq!(value["status"], "Unpublished");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("tableOfContents").is_some());
        assert!(value.get("university").is_none());
    }
}
