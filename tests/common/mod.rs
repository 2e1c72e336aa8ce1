//! Common Test Utilities
//!
//! Shared helpers, fixtures, and test infrastructure.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    response::Response,
    Router,
};
use fake::{faker::address::en::CityName, Fake};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tower::ServiceExt;

use location_registry::config::Settings;
use location_registry::startup::{build_router, AppState};

/// Test application over a fresh in-memory repository
pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    /// Rate limiting disabled so suites can issue any number of requests
    pub fn new() -> Self {
        let mut settings = test_settings();
        settings.rate_limit.enabled = false;
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            router: build_router(AppState::in_memory(settings)),
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    /// Make a GET request to the application
    pub async fn get(&self, uri: &str) -> Response {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make a GET request as a given client address
    pub async fn get_as(&self, uri: &str, client_ip: &str) -> Response {
        self.send(
            Request::builder()
                .method("GET")
                .uri(uri)
                .header("X-Forwarded-For", client_ip)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: &str) -> Response {
        self.send(json_request("POST", uri, body)).await
    }

    /// Make a PUT request with JSON body
    pub async fn put_json(&self, uri: &str, body: &str) -> Response {
        self.send(json_request("PUT", uri, body)).await
    }

    /// Create a location and return the stored JSON, asserting success
    pub async fn create_location(
        &self,
        name: &str,
        latitude: f64,
        longitude: f64,
        color: &str,
    ) -> Value {
        let body = location_body(name, latitude, longitude, color);
        let response = self.post_json("/api/locations", &body).await;
        assert_eq!(response.status(), StatusCode::CREATED);
        read_json(response).await
    }
}

pub fn test_settings() -> Settings {
    Settings::defaults().expect("default settings are valid")
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn location_body(name: &str, latitude: f64, longitude: f64, color: &str) -> String {
    json!({
        "name": name,
        "latitude": latitude,
        "longitude": longitude,
        "color": color,
    })
    .to_string()
}

/// Read and deserialize a JSON response body
pub async fn read_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body is readable");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

/// A random but valid location name
pub fn random_name() -> String {
    CityName().fake()
}
