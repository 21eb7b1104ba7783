//! Startup orchestration.
//!
//! Subsystems initialize in order: metrics, state, listener. Traffic is only
//! accepted once everything before it succeeded.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::ApiConfig;
use crate::http::AppState;
use crate::observability::metrics;

/// Build the application state the config asks for.
pub fn build_state(config: &ApiConfig) -> AppState {
    let state = if config.store.seed {
        AppState::seeded(&config.service.name)
    } else {
        AppState::empty(&config.service.name)
    };

    tracing::info!(
        seeded = config.store.seed,
        projects = state.projects.len().unwrap_or_default(),
        categories = state.categories.len().unwrap_or_default(),
        "Store initialized"
    );
    state
}

/// Start the metrics exporter when enabled.
pub fn start_metrics(config: &ApiConfig) {
    if !config.observability.metrics_enabled {
        return;
    }
    match config.observability.metrics_address.parse::<SocketAddr>() {
        Ok(addr) => metrics::init_metrics(addr),
        Err(_) => tracing::error!(
            metrics_address = %config.observability.metrics_address,
            "Failed to parse metrics address"
        ),
    }
}

/// Bind the configured listener address.
pub async fn bind(config: &ApiConfig) -> std::io::Result<TcpListener> {
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");
    Ok(listener)
}
