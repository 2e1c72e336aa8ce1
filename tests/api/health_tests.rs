//! Health Check and Metrics API Tests

use axum::body::to_bytes;
use axum::http::StatusCode;
use serde_json::Value;

use crate::common::{read_json, TestApp};

#[tokio::test]
async fn test_health_check_returns_ok() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = read_json(response).await;
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = TestApp::new();

    let response = app.get("/health/live").await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_readiness_probe_with_memory_storage() {
    let app = TestApp::new();

    let response = app.get("/health/ready").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json: Value = read_json(response).await;
    assert_eq!(json["checks"]["storage"]["backend"], "memory");
    assert_eq!(json["checks"]["storage"]["status"], "healthy");
}

#[tokio::test]
async fn test_metrics_endpoint_exposes_request_counter() {
    let app = TestApp::new();
    app.get("/api/locations").await;

    let response = app.get("/metrics").await;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("location_registry_http_requests_total"));
}
