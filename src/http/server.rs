//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Own the application state (collections) injected into handlers
//! - Create the Axum router with all API routes
//! - Wire up middleware (request ID, tracing, CORS, limits, panics)
//! - Serve on a listener until shutdown

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{HeaderValue, Method},
    response::{IntoResponse, Response},
    Router,
};
use chrono::Utc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any as CorsAny, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::api::{self, ApiError};
use crate::config::{ApiConfig, SecurityConfig};
use crate::http::request::{make_request_span, propagate_request_id_layer, set_request_id_layer};
use crate::lifecycle::signals::shutdown_signal;
use crate::lifecycle::ShutdownSignal;
use crate::model::{Category, Project};
use crate::store::{seed, Collection};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<Collection<Project>>,
    pub categories: Arc<Collection<Category>>,
    pub service_name: Arc<str>,
}

impl AppState {
    /// State with empty collections.
    pub fn empty(service_name: &str) -> Self {
        Self::with_records(service_name, Vec::new(), Vec::new())
    }

    /// State loaded with the built-in seed records.
    pub fn seeded(service_name: &str) -> Self {
        Self::with_records(service_name, seed::projects(Utc::now()), seed::categories())
    }

    pub fn with_records(service_name: &str, projects: Vec<Project>, categories: Vec<Category>) -> Self {
        Self {
            projects: Arc::new(Collection::with_records("projects", projects)),
            categories: Arc::new(Collection::with_records("categories", categories)),
            service_name: Arc::from(service_name),
        }
    }
}

/// HTTP server for the API.
pub struct HttpServer {
    router: Router,
    config: ApiConfig,
}

impl HttpServer {
    /// Create a new HTTP server over `state`.
    pub fn new(config: ApiConfig, state: AppState) -> Self {
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(config: &ApiConfig, state: AppState) -> Router {
        apply_layers(api::routes().with_state(state), config)
    }

    /// Run the server, accepting connections on the given listener until
    /// Ctrl-C, SIGTERM, or `shutdown` firing.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            service = %self.config.service.name,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// The assembled router, for serving elsewhere.
    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Wrap `router` in the request ID, tracing, panic, body limit, CORS and
/// timeout middleware. Outermost layer first.
#[allow(deprecated)]
pub fn apply_layers(router: Router, config: &ApiConfig) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(set_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
            .layer(propagate_request_id_layer())
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(cors_layer(&config.security))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs))),
    )
}

/// Cross-origin policy: any origin unless the config lists specific ones.
fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    let origins = if security.allows_any_origin() {
        AllowOrigin::from(CorsAny)
    } else {
        let parsed: Vec<HeaderValue> = security
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::HEAD,
            Method::PUT,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
        ])
        .allow_headers(CorsAny)
}

/// Render a handler panic as the generic 500 body.
fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    ApiError::Internal(format!("handler panicked: {detail}")).into_response()
}
