//! `/api/categories` handlers.

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::api::errors::ApiError;
use crate::http::server::AppState;
use crate::model::{Category, NewCategory};
use crate::observability::metrics;
use crate::query::{CategoryFilters, CategoryQuery, Envelope, RawQuery};

const NOT_FOUND: &str = "Category not found";

pub async fn list_categories(
    State(state): State<AppState>,
    query: Result<Query<RawQuery>, QueryRejection>,
) -> Result<Json<Envelope<Category, CategoryFilters>>, ApiError> {
    let Query(raw) = query?;
    let query = CategoryQuery::from_raw(&raw)?;
    let categories = state.categories.list()?;
    Ok(Json(query.apply(categories)))
}

pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Category>, ApiError> {
    let id: u64 = id
        .trim()
        .parse()
        .map_err(|_| ApiError::NotFound(NOT_FOUND.into()))?;

    state
        .categories
        .get(id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(NOT_FOUND.into()))
}

pub async fn create_category(
    State(state): State<AppState>,
    payload: Result<Json<NewCategory>, JsonRejection>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let Json(body) = payload?;
    let category = state.categories.create(body.into_category()?)?;

    metrics::record_created(state.categories.name(), state.categories.len()?);
    tracing::info!(id = category.id, title = %category.title, "Category created");

    Ok((StatusCode::CREATED, Json(category)))
}
