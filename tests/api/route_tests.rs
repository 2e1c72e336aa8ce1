//! Route (nearest-first) API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use location_registry::application::dto::response::LocationResponse;
use location_registry::shared::error::ErrorResponse;

use crate::common::{read_json, TestApp};

async fn seed_moscow(app: &TestApp) {
    app.create_location("A", 55.7558, 37.6173, "#FF5733").await;
    app.create_location("B", 55.7512, 37.6231, "#33FF57").await;
    app.create_location("C", 55.7581, 37.6100, "#5733FF").await;
}

fn names(route: &[LocationResponse]) -> Vec<&str> {
    route.iter().map(|l| l.name.as_str()).collect()
}

#[tokio::test]
async fn test_route_orders_all_locations_nearest_first() {
    let app = TestApp::new();
    seed_moscow(&app).await;

    let response = app.get("/api/route?lat=55.7550&lon=37.6150").await;

    assert_eq!(response.status(), StatusCode::OK);
    let route: Vec<LocationResponse> = read_json(response).await;
    assert_eq!(names(&route), vec!["A", "C", "B"]);
}

#[tokio::test]
async fn test_route_accepts_long_parameter_names() {
    let app = TestApp::new();
    seed_moscow(&app).await;

    let response = app
        .get("/api/route?latitude=55.7550&longitude=37.6150")
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let route: Vec<LocationResponse> = read_json(response).await;
    assert_eq!(names(&route), vec!["A", "C", "B"]);
}

#[tokio::test]
async fn test_route_from_other_side_reverses_order() {
    let app = TestApp::new();
    seed_moscow(&app).await;

    // South-east of B
    let response = app.get("/api/route?lat=55.7400&lon=37.6400").await;

    let route: Vec<LocationResponse> = read_json(response).await;
    assert_eq!(route.len(), 3);
    assert_eq!(route[0].name, "B");
    assert_eq!(route[2].name, "C");
}

#[tokio::test]
async fn test_route_at_origin_is_accepted() {
    // (0, 0) is a real point in the Gulf of Guinea, not a missing value.
    let app = TestApp::new();
    app.create_location("Null Island", 0.0, 0.0, "#000000").await;
    app.create_location("Accra", 5.6037, -0.1870, "#FFAA00").await;
    app.create_location("Quito", -0.1807, -78.4678, "#00AAFF").await;

    let response = app.get("/api/route?lat=0&lon=0").await;

    assert_eq!(response.status(), StatusCode::OK);
    let route: Vec<LocationResponse> = read_json(response).await;
    assert_eq!(names(&route), vec!["Null Island", "Accra", "Quito"]);
}

#[tokio::test]
async fn test_route_with_one_zero_coordinate_is_accepted() {
    let app = TestApp::new();
    seed_moscow(&app).await;

    let response = app.get("/api/route?lat=0&lon=37.6150").await;

    assert_eq!(response.status(), StatusCode::OK);
    let route: Vec<LocationResponse> = read_json(response).await;
    assert_eq!(route.len(), 3);
}

#[tokio::test]
async fn test_route_on_empty_store_is_empty() {
    let app = TestApp::new();

    let response = app.get("/api/route?lat=10&lon=10").await;

    assert_eq!(response.status(), StatusCode::OK);
    let route: Vec<LocationResponse> = read_json(response).await;
    assert!(route.is_empty());
}

#[tokio::test]
async fn test_route_without_coordinates_is_bad_request() {
    let app = TestApp::new();

    for uri in ["/api/route", "/api/route?lat=55.75", "/api/route?lat=&lon=37.6"] {
        let response = app.get(uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let error: ErrorResponse = read_json(response).await;
        assert_eq!(error.message, "latitude and longitude are required");
    }
}

#[tokio::test]
async fn test_route_with_invalid_coordinates_is_bad_request() {
    let app = TestApp::new();

    for uri in [
        "/api/route?lat=north&lon=37.6",
        "/api/route?lat=91&lon=37.6",
        "/api/route?lat=55.7&lon=-180.5",
    ] {
        let response = app.get(uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let error: ErrorResponse = read_json(response).await;
        assert_eq!(error.message, "invalid latitude or longitude");
    }
}
