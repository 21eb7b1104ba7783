//! API error types mapped to HTTP status codes.
//!
//! Each [`ApiError`] variant maps to a specific HTTP status code and produces
//! a JSON response body `{"message": "..."}`.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::store::StoreError;

/// Message sent for every internal failure; the cause is only logged.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Application-level error type that implements `IntoResponse`.
///
/// - `Validation` → 400
/// - `NotFound` → 404
/// - `Internal` → 500
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad or missing input.
    #[error("{0}")]
    Validation(String),
    /// Unknown identifier or route.
    #[error("{0}")]
    NotFound(String),
    /// Unexpected failure. The payload is logged, never sent.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::Validation(msg) => {
                tracing::debug!(message = %msg, "Rejected request");
                msg
            }
            ApiError::NotFound(msg) => {
                tracing::debug!(message = %msg, "Not found");
                msg
            }
            ApiError::Internal(cause) => {
                tracing::error!(error = %cause, "Request failed");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };
        (status, Json(json!({ "message": message }))).into_response()
    }
}
