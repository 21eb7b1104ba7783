//! Category list queries. Categories are few, so there is no pagination.

use serde::Serialize;

use crate::api::errors::ApiError;
use crate::model::Category;
use crate::query::envelope::{Envelope, SortDescriptor};
use crate::query::matches_text;
use crate::query::params::{text_param, NumericRange, RawQuery, SortOrder};
use crate::query::sort::{sort_records, SortValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategorySortField {
    #[default]
    Title,
    ProjectCount,
}

impl CategorySortField {
    pub const DEFAULT_ORDER: SortOrder = SortOrder::Asc;

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "title" => Some(Self::Title),
            "projectCount" => Some(Self::ProjectCount),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::ProjectCount => "projectCount",
        }
    }

    fn value<'a>(&self, category: &'a Category) -> Option<SortValue<'a>> {
        Some(match self {
            Self::Title => SortValue::Text(&category.title),
            Self::ProjectCount => SortValue::Number(category.project_count as f64),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_count: Option<f64>,
}

/// A fully parsed `GET /api/categories` request.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryQuery {
    pub filters: CategoryFilters,
    pub count: NumericRange,
    pub sort_by: CategorySortField,
    pub order: SortOrder,
}

impl CategoryQuery {
    pub fn from_raw(raw: &RawQuery) -> Result<Self, ApiError> {
        let count = NumericRange::parse(raw, "minCount", "maxCount")?;

        Ok(Self {
            filters: CategoryFilters {
                q: text_param(raw, "q"),
                min_count: count.min,
                max_count: count.max,
            },
            count,
            sort_by: raw
                .get("sortBy")
                .and_then(|s| CategorySortField::parse(s))
                .unwrap_or_default(),
            order: SortOrder::parse(raw.get("order").map(String::as_str), CategorySortField::DEFAULT_ORDER),
        })
    }

    pub fn matches(&self, category: &Category) -> bool {
        if let Some(q) = &self.filters.q {
            if !matches_text(&q.to_lowercase(), [Some(category.title.as_str())]) {
                return false;
            }
        }
        self.count.contains(category.project_count as f64)
    }

    pub fn apply(self, categories: Vec<Category>) -> Envelope<Category, CategoryFilters> {
        let mut data: Vec<Category> = categories.into_iter().filter(|c| self.matches(c)).collect();

        let field = self.sort_by;
        sort_records(&mut data, self.order, |c| field.value(c));

        Envelope {
            data,
            pagination: None,
            sort: SortDescriptor {
                by: field.as_str(),
                order: self.order,
            },
            filters: self.filters,
        }
    }
}
