//! `/api/projects` handlers.

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;

use crate::api::errors::ApiError;
use crate::http::server::AppState;
use crate::model::{NewProject, Project};
use crate::observability::metrics;
use crate::query::{Envelope, ProjectFilters, ProjectQuery, RawQuery};

const NOT_FOUND: &str = "Project not found";

pub async fn list_projects(
    State(state): State<AppState>,
    query: Result<Query<RawQuery>, QueryRejection>,
) -> Result<Json<Envelope<Project, ProjectFilters>>, ApiError> {
    let Query(raw) = query?;
    let query = ProjectQuery::from_raw(&raw)?;
    let projects = state.projects.list()?;

    let envelope = query.apply(projects);
    tracing::debug!(returned = envelope.data.len(), "Listed projects");
    Ok(Json(envelope))
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Project>, ApiError> {
    let id: u64 = id
        .trim()
        .parse()
        .map_err(|_| ApiError::NotFound(NOT_FOUND.into()))?;

    state
        .projects
        .get(id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(NOT_FOUND.into()))
}

pub async fn create_project(
    State(state): State<AppState>,
    payload: Result<Json<NewProject>, JsonRejection>,
) -> Result<(StatusCode, Json<Project>), ApiError> {
    let Json(body) = payload?;
    let draft = body.into_project(Utc::now())?;
    let project = state.projects.create(draft)?;

    metrics::record_created(state.projects.name(), state.projects.len()?);
    tracing::info!(id = project.id, title = %project.title, "Project created");

    Ok((StatusCode::CREATED, Json(project)))
}
