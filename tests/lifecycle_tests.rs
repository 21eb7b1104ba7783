use std::time::Duration;

use paperx_api::config::ApiConfig;
use paperx_api::{AppState, HttpServer, Shutdown};

#[tokio::test]
async fn test_server_stops_when_triggered_before_run() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let server = HttpServer::new(ApiConfig::default(), AppState::empty("paperx-api"));

    let shutdown = Shutdown::new();
    shutdown.trigger();
    let signal = shutdown.subscribe();

    let result = tokio::time::timeout(Duration::from_secs(5), server.run(listener, signal)).await;
    assert!(matches!(result, Ok(Ok(()))));
}

#[tokio::test]
async fn test_server_stops_on_trigger() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let server = HttpServer::new(ApiConfig::default(), AppState::empty("paperx-api"));

    let shutdown = Shutdown::new();
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));
    assert_eq!(shutdown.receiver_count(), 1);

    shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), handle).await;
    assert!(matches!(result, Ok(Ok(Ok(())))));
}
