//! REST resources: projects, categories and health.

pub mod categories;
pub mod errors;
pub mod health;
pub mod projects;

use axum::{middleware, routing::get, Router};

use crate::http::server::AppState;
use crate::observability::metrics::track_requests;

pub use errors::ApiError;

/// All `/api` routes, before state and the outer middleware are attached.
///
/// Request metrics wrap the fallback too, so unknown paths are counted
/// under `path="unmatched"`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health))
        .route(
            "/api/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route("/api/projects/{id}", get(projects::get_project))
        .route(
            "/api/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route("/api/categories/{id}", get(categories::get_category))
        .fallback(route_not_found)
        .layer(middleware::from_fn(track_requests))
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".into())
}
