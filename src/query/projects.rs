//! Project list queries.

use serde::Serialize;

use crate::api::errors::ApiError;
use crate::model::Project;
use crate::query::envelope::{paginate, Envelope, SortDescriptor};
use crate::query::matches_text;
use crate::query::params::{split_list, text_param, NumericRange, PageRequest, RawQuery, SortOrder};
use crate::query::sort::{sort_records, SortValue};

/// Fields projects may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectSortField {
    #[default]
    CreatedAt,
    Title,
    Price,
    Downloads,
}

impl ProjectSortField {
    pub const DEFAULT_ORDER: SortOrder = SortOrder::Desc;

    /// Exact, case-sensitive match on the wire name.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "createdAt" => Some(Self::CreatedAt),
            "title" => Some(Self::Title),
            "price" => Some(Self::Price),
            "downloads" => Some(Self::Downloads),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreatedAt => "createdAt",
            Self::Title => "title",
            Self::Price => "price",
            Self::Downloads => "downloads",
        }
    }

    fn value<'a>(&self, project: &'a Project) -> Option<SortValue<'a>> {
        Some(match self {
            Self::CreatedAt => SortValue::Time(project.created_at),
            Self::Title => SortValue::Text(&project.title),
            Self::Price => SortValue::Number(project.price),
            Self::Downloads => SortValue::Number(project.downloads as f64),
        })
    }
}

/// Filters echoed back in the response, as applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_downloads: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_downloads: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// A fully parsed `GET /api/projects` request.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectQuery {
    pub filters: ProjectFilters,
    pub price: NumericRange,
    pub downloads: NumericRange,
    pub sort_by: ProjectSortField,
    pub order: SortOrder,
    pub page: PageRequest,
}

impl ProjectQuery {
    pub fn from_raw(raw: &RawQuery) -> Result<Self, ApiError> {
        let price = NumericRange::parse(raw, "minPrice", "maxPrice")?;
        let downloads = NumericRange::parse(raw, "minDownloads", "maxDownloads")?;

        Ok(Self {
            filters: ProjectFilters {
                q: text_param(raw, "q"),
                category: text_param(raw, "category"),
                status: text_param(raw, "status"),
                min_price: price.min,
                max_price: price.max,
                min_downloads: downloads.min,
                max_downloads: downloads.max,
                tag: text_param(raw, "tag"),
            },
            price,
            downloads,
            sort_by: raw
                .get("sortBy")
                .and_then(|s| ProjectSortField::parse(s))
                .unwrap_or_default(),
            order: SortOrder::parse(raw.get("order").map(String::as_str), ProjectSortField::DEFAULT_ORDER),
            page: PageRequest::parse(raw),
        })
    }

    /// Whether `project` passes every filter.
    pub fn matches(&self, project: &Project) -> bool {
        let filters = &self.filters;

        if let Some(q) = &filters.q {
            let needle = q.to_lowercase();
            let fields = [
                Some(project.title.as_str()),
                Some(project.author.as_str()),
                project.university.as_deref(),
                project.department.as_deref(),
                project.subject.as_deref(),
                project.description.as_deref(),
            ];
            if !matches_text(&needle, fields) {
                return false;
            }
        }

        if let Some(category) = &filters.category {
            if !split_list(category).contains(&project.category.to_lowercase()) {
                return false;
            }
        }

        if let Some(status) = &filters.status {
            if !split_list(status).contains(&project.status.as_str().to_lowercase()) {
                return false;
            }
        }

        if let Some(tag) = &filters.tag {
            let wanted = split_list(tag);
            if !project.tags.iter().any(|t| wanted.contains(&t.to_lowercase())) {
                return false;
            }
        }

        self.price.contains(project.price) && self.downloads.contains(project.downloads as f64)
    }

    /// Filter, sort and paginate `projects`.
    pub fn apply(self, projects: Vec<Project>) -> Envelope<Project, ProjectFilters> {
        let mut result: Vec<Project> = projects.into_iter().filter(|p| self.matches(p)).collect();

        let field = self.sort_by;
        sort_records(&mut result, self.order, |p| field.value(p));

        let (data, pagination) = paginate(result, self.page);

        Envelope {
            data,
            pagination: Some(pagination),
            sort: SortDescriptor {
                by: field.as_str(),
                order: self.order,
            },
            filters: self.filters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProjectStatus;
    use crate::store::seed;
    use chrono::{Duration, Utc};

    fn query(pairs: &[(&str, &str)]) -> ProjectQuery {
        let raw: RawQuery = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ProjectQuery::from_raw(&raw).unwrap()
    }

    fn priced(prices: &[f64]) -> Vec<Project> {
        let template = seed::projects(Utc::now()).remove(0);
        prices
            .iter()
            .zip(1..)
            .map(|(price, id)| Project {
                id,
                price: *price,
                ..template.clone()
            })
            .collect()
    }

    fn prices(envelope: &Envelope<Project, ProjectFilters>) -> Vec<f64> {
        envelope.data.iter().map(|p| p.price).collect()
    }

    #[test]
    fn test_defaults() {
        let q = query(&[]);
        assert_eq!(q.sort_by, ProjectSortField::CreatedAt);
        assert_eq!(q.order, SortOrder::Desc);
        assert_eq!(q.page, PageRequest::default());
        assert_eq!(q.filters, ProjectFilters::default());
    }

    #[test]
    fn test_unknown_sort_field_falls_back() {
        let q = query(&[("sortBy", "rating"), ("order", "up")]);
        assert_eq!(q.sort_by, ProjectSortField::CreatedAt);
        assert_eq!(q.order, SortOrder::Desc);
    }

    #[test]
    fn test_invalid_downloads_bound_rejected() {
        let raw: RawQuery = [("minDownloads".to_string(), "abc".to_string())].into();
        assert!(matches!(ProjectQuery::from_raw(&raw), Err(ApiError::Validation(_))));
    }

    #[test]
    fn test_sort_by_price() {
        let asc = query(&[("sortBy", "price"), ("order", "asc")]).apply(priced(&[100.0, 50.0, 75.0]));
        assert_eq!(prices(&asc), vec![50.0, 75.0, 100.0]);

        let desc = query(&[("sortBy", "price"), ("order", "desc")]).apply(priced(&[100.0, 50.0, 75.0]));
        assert_eq!(prices(&desc), vec![100.0, 75.0, 50.0]);
        assert_eq!(desc.sort, SortDescriptor { by: "price", order: SortOrder::Desc });
    }

    #[test]
    fn test_sort_by_created_at_defaults_newest_first() {
        let now = Utc::now();
        let mut projects = priced(&[1.0, 2.0, 3.0]);
        for (offset, project) in projects.iter_mut().enumerate() {
            project.created_at = now + Duration::seconds(offset as i64);
        }
        let page = query(&[]).apply(projects);
        let ids: Vec<_> = page.data.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_min_price_above_everything() {
        let page = query(&[("minPrice", "1000")]).apply(priced(&[100.0, 50.0, 75.0]));
        assert!(page.data.is_empty());
        let pagination = page.pagination.unwrap();
        assert_eq!(pagination.total, 0);
        assert_eq!(pagination.pages, 0);
        assert_eq!(page.filters.min_price, Some(1000.0));
    }

    #[test]
    fn test_price_range_inclusive() {
        let page = query(&[("minPrice", "50"), ("maxPrice", "75"), ("sortBy", "price"), ("order", "asc")])
            .apply(priced(&[100.0, 50.0, 75.0]));
        assert_eq!(prices(&page), vec![50.0, 75.0]);
    }

    #[test]
    fn test_pagination_window() {
        let page = query(&[("limit", "1"), ("page", "2"), ("sortBy", "price"), ("order", "asc")])
            .apply(priced(&[100.0, 50.0, 75.0]));
        assert_eq!(prices(&page), vec![75.0]);
        let pagination = page.pagination.unwrap();
        assert_eq!((pagination.total, pagination.page, pagination.limit, pagination.pages), (3, 2, 1, 3));
    }

    #[test]
    fn test_text_search_across_fields() {
        let projects = seed::projects(Utc::now());
        assert_eq!(query(&[("q", "STANFORD")]).apply(projects.clone()).data.len(), 1);
        assert_eq!(query(&[("q", "john")]).apply(projects.clone()).data.len(), 2);
        assert_eq!(query(&[("q", "pest detection")]).apply(projects.clone()).data.len(), 1);
        assert!(query(&[("q", "quantum")]).apply(projects).data.is_empty());
    }

    #[test]
    fn test_categorical_filters() {
        let projects = seed::projects(Utc::now());

        let page = query(&[("status", "published")]).apply(projects.clone());
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].status, ProjectStatus::Published);

        let page = query(&[("status", "Draft, unpublished")]).apply(projects.clone());
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].status, ProjectStatus::Unpublished);

        assert_eq!(query(&[("category", "law,technology")]).apply(projects.clone()).data.len(), 2);
        assert!(query(&[("category", "law")]).apply(projects).data.is_empty());
    }

    #[test]
    fn test_tag_filter_matches_any() {
        let projects = seed::projects(Utc::now());
        assert_eq!(query(&[("tag", "ai,healthcare")]).apply(projects.clone()).data.len(), 2);

        let page = query(&[("tag", "healthcare")]).apply(projects.clone());
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, 1);

        assert!(query(&[("tag", "robotics")]).apply(projects).data.is_empty());
    }

    #[test]
    fn test_downloads_range() {
        let projects = seed::projects(Utc::now());
        let page = query(&[("minDownloads", "1000")]).apply(projects);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].downloads, 5234);
    }
}
