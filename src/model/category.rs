use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::errors::ApiError;
use crate::model::{count_or_zero, non_empty};
use crate::store::Record;

/// A subject area grouping projects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: u64,
    pub title: String,
    pub project_count: u64,
}

impl Record for Category {
    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// Body of `POST /api/categories`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    pub title: Option<String>,
    pub project_count: Option<Value>,
}

impl NewCategory {
    /// Validate the payload into an unsaved category (id assigned by the store).
    pub fn into_category(self) -> Result<Category, ApiError> {
        if !non_empty(&self.title) {
            return Err(ApiError::Validation("title is required".into()));
        }

        Ok(Category {
            id: 0,
            title: self.title.unwrap_or_default(),
            project_count: count_or_zero(self.project_count.as_ref()),
        })
    }
}
