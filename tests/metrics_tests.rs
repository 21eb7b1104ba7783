use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use reqwest::StatusCode;
use std::sync::OnceLock;

mod common;

use common::{client, spawn_seeded};

static RECORDER: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install one process-wide recorder shared by every test in this binary.
fn recorder() -> &'static PrometheusHandle {
    RECORDER.get_or_init(|| {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        metrics::set_global_recorder(recorder).expect("Recorder already installed");
        handle
    })
}

fn request_lines<'a>(rendered: &'a str, path: &str) -> Vec<&'a str> {
    let label = format!("path=\"{path}\"");
    rendered
        .lines()
        .filter(|line| line.starts_with("paperx_requests_total") && line.contains(&label))
        .collect()
}

#[tokio::test]
async fn test_unknown_route_counted_as_unmatched() {
    let handle = recorder();
    let app = spawn_seeded().await;

    let res = client().get(app.url("/api/nowhere")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let rendered = handle.render();
    let lines = request_lines(&rendered, "unmatched");
    assert!(
        lines.iter().any(|line| line.contains("status=\"404\"")),
        "no unmatched 404 in:\n{rendered}"
    );
}

#[tokio::test]
async fn test_matched_route_counted_by_template() {
    let handle = recorder();
    let app = spawn_seeded().await;

    let res = client().get(app.url("/api/projects/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let res = client().get(app.url("/api/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let rendered = handle.render();
    assert!(!request_lines(&rendered, "/api/projects/{id}").is_empty(), "{rendered}");
    assert!(!request_lines(&rendered, "/api/health").is_empty(), "{rendered}");
}
