//! Rate Limiting API Tests

use axum::http::{header, StatusCode};
use serde_json::Value;

use crate::common::{read_json, test_settings, TestApp};

fn limited_app(requests_per_window: u32) -> TestApp {
    let mut settings = test_settings();
    settings.rate_limit.enabled = true;
    settings.rate_limit.requests_per_window = requests_per_window;
    settings.rate_limit.window_seconds = 60;
    TestApp::with_settings(settings)
}

#[tokio::test]
async fn test_requests_over_limit_are_rejected() {
    let app = limited_app(2);

    for _ in 0..2 {
        let response = app.get_as("/api/locations", "203.0.113.1").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.get_as("/api/locations", "203.0.113.1").await;
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    assert!(response.headers().contains_key(header::RETRY_AFTER));
}

#[tokio::test]
async fn test_rejection_body_matches_retry_after_header() {
    let app = limited_app(1);
    app.get_as("/api/route?lat=1&lon=1", "203.0.113.9").await;

    let response = app.get_as("/api/route?lat=1&lon=1", "203.0.113.9").await;

    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let retry_after = response.headers()[header::RETRY_AFTER]
        .to_str()
        .unwrap()
        .to_owned();
    assert_eq!(retry_after, "60");
    assert_eq!(response.headers()["X-RateLimit-Remaining"], "0");

    let body: Value = read_json(response).await;
    assert_eq!(body["code"], 10006);
    assert_eq!(body["rate_limit"]["retry_after"], 60);
}

#[tokio::test]
async fn test_limit_is_per_client() {
    let app = limited_app(1);

    assert_eq!(
        app.get_as("/api/locations", "203.0.113.1").await.status(),
        StatusCode::OK
    );
    assert_eq!(
        app.get_as("/api/locations", "203.0.113.1").await.status(),
        StatusCode::TOO_MANY_REQUESTS
    );
    assert_eq!(
        app.get_as("/api/locations", "203.0.113.2").await.status(),
        StatusCode::OK
    );
}

#[tokio::test]
async fn test_allowed_responses_carry_rate_limit_headers() {
    let app = limited_app(5);

    let response = app.get_as("/api/locations", "198.51.100.9").await;

    assert_eq!(response.headers()["X-RateLimit-Limit"], "5");
    assert_eq!(response.headers()["X-RateLimit-Remaining"], "4");
}

#[tokio::test]
async fn test_health_is_not_rate_limited() {
    let app = limited_app(1);

    for _ in 0..3 {
        let response = app.get_as("/health", "203.0.113.5").await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
