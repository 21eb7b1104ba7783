//! Metrics collection and exposition.
//!
//! # Metrics
//! - `paperx_requests_total` (counter): requests by method, path, status
//! - `paperx_request_duration_seconds` (histogram): latency distribution
//! - `paperx_records_created_total` (counter): creations per collection
//! - `paperx_collection_records` (gauge): current size per collection

use std::net::SocketAddr;
use std::time::Instant;

use axum::{body::Body, extract::MatchedPath, http::Request, middleware::Next, response::Response};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Start the Prometheus scrape endpoint on `addr`.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to start metrics exporter"),
    }
}

/// Record a completed request.
pub fn record_request(method: &str, path: &str, status: u16, start: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("path", path.to_string()),
        ("status", status.to_string()),
    ];
    counter!("paperx_requests_total", &labels).increment(1);
    histogram!("paperx_request_duration_seconds", &labels).record(start.elapsed().as_secs_f64());
}

/// Record a successful create and the collection's new size.
pub fn record_created(collection: &'static str, size: usize) {
    counter!("paperx_records_created_total", "collection" => collection).increment(1);
    gauge!("paperx_collection_records", "collection" => collection).set(size as f64);
}

/// Middleware recording every request against its route template.
///
/// The matched template (`/api/projects/{id}`) keeps label cardinality bounded.
pub async fn track_requests(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let response = next.run(req).await;
    record_request(&method, &path, response.status().as_u16(), start);
    response
}
