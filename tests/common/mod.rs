//! Shared utilities for integration testing.

use paperx_api::config::ApiConfig;
use axum::Router;
use paperx_api::{AppState, HttpServer, Shutdown};
use reqwest::Client;

/// A running server on an ephemeral port. Dropping it stops the server.
pub struct TestApp {
    pub base_url: String,
    pub state: AppState,
    shutdown: Shutdown,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Serve `state` with the default middleware stack.
pub async fn spawn_app(state: AppState) -> TestApp {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(ApiConfig::default(), state.clone());
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestApp {
        base_url: format!("http://{}", addr),
        state,
        shutdown,
    }
}

/// Serve an already-assembled router, outside `HttpServer`.
#[allow(dead_code)]
pub async fn spawn_router(router: Router) -> TestApp {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let signal = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router)
            .with_graceful_shutdown(signal.triggered())
            .await;
    });

    TestApp {
        base_url: format!("http://{}", addr),
        state: AppState::empty("paperx-api"),
        shutdown,
    }
}

/// Server over the seed records.
#[allow(dead_code)]
pub async fn spawn_seeded() -> TestApp {
    spawn_app(AppState::seeded("paperx-api")).await
}

/// Server over empty collections.
#[allow(dead_code)]
pub async fn spawn_empty() -> TestApp {
    spawn_app(AppState::empty("paperx-api")).await
}

pub fn client() -> Client {
    Client::builder().no_proxy().build().unwrap()
}
