//! Location CRUD API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;

use location_registry::application::dto::response::LocationResponse;
use location_registry::shared::error::ErrorResponse;

use crate::common::{location_body, random_name, read_json, TestApp};

#[tokio::test]
async fn test_create_location_returns_created_record() {
    let app = TestApp::new();
    let name = random_name();

    let response = app
        .post_json("/api/locations", &location_body(&name, 55.7558, 37.6173, "#FF5733"))
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let created: LocationResponse = read_json(response).await;
    assert_eq!(created.name, name);
    assert_eq!(created.latitude, 55.7558);
    assert_eq!(created.longitude, 37.6173);
    assert_eq!(created.color, "#FF5733");
    assert!(created.id > 0);
}

#[tokio::test]
async fn test_created_location_can_be_fetched() {
    let app = TestApp::new();
    let created = app.create_location("Park", 55.7581, 37.61, "#5733FF").await;
    let id = created["id"].as_i64().unwrap();

    let response = app.get(&format!("/api/locations/{id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let fetched: Value = read_json(response).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_accepts_marker_color_alias() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/locations",
            r##"{"name":"Old","latitude":55.7558,"longitude":37.6173,"marker_color":"#FF5733"}"##,
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let created: LocationResponse = read_json(response).await;
    assert_eq!(created.color, "#FF5733");
}

#[tokio::test]
async fn test_create_rejects_empty_name() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/locations", &location_body("", 55.76, 37.62, "#33FF57"))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = read_json(response).await;
    let fields: Vec<String> = error.errors.unwrap().into_iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["name".to_string()]);
}

#[tokio::test]
async fn test_create_reports_every_invalid_field() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/locations", &location_body("", 95.0, 37.62, "#XYZ"))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = read_json(response).await;
    assert!(error.message.starts_with("color:"));
    let fields: Vec<String> = error.errors.unwrap().into_iter().map(|e| e.field).collect();
    assert_eq!(fields, vec!["color", "name", "latitude"]);
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let app = TestApp::new();

    let response = app.post_json("/api/locations", "{not json").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .post_json("/api/locations", r##"{"name":"No coords","color":"#FF5733"}"##)
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_locations_returns_everything() {
    let app = TestApp::new();
    let empty: Vec<LocationResponse> = read_json(app.get("/api/locations").await).await;
    assert!(empty.is_empty());

    for i in 0..3 {
        app.create_location(&random_name(), 10.0 + i as f64, 20.0, "#ABCDEF")
            .await;
    }

    let response = app.get("/api/locations").await;
    assert_eq!(response.status(), StatusCode::OK);
    let all: Vec<LocationResponse> = read_json(response).await;
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_get_unknown_location_is_not_found() {
    let app = TestApp::new();

    let response = app.get("/api/locations/999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = read_json(response).await;
    assert_eq!(error.message, "Location 999 not found");
}

#[tokio::test]
async fn test_get_with_non_numeric_id_is_bad_request() {
    let app = TestApp::new();

    let response = app.get("/api/locations/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_edit_location_replaces_all_fields() {
    let app = TestApp::new();
    let created = app.create_location("Old", 55.7558, 37.6173, "#FF5733").await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .put_json(
            &format!("/api/locations/{id}"),
            &location_body("Updated", 55.76, 37.62, "#33FF57"),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let updated: LocationResponse = read_json(response).await;
    assert_eq!(updated.id, id);

    let fetched: LocationResponse =
        read_json(app.get(&format!("/api/locations/{id}")).await).await;
    assert_eq!(fetched.name, "Updated");
    assert_eq!(fetched.latitude, 55.76);
    assert_eq!(fetched.longitude, 37.62);
    assert_eq!(fetched.color, "#33FF57");
    assert_eq!(fetched.created_at, created["created_at"].as_str().unwrap());
}

#[tokio::test]
async fn test_edit_rejects_invalid_input_and_keeps_record() {
    let app = TestApp::new();
    let created = app.create_location("Old", 55.7558, 37.6173, "#FF5733").await;
    let id = created["id"].as_i64().unwrap();

    let response = app
        .put_json(
            &format!("/api/locations/{id}"),
            &location_body("", 55.76, 37.62, "#XYZ"),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let fetched: Value = read_json(app.get(&format!("/api/locations/{id}")).await).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_edit_unknown_location_is_not_found() {
    let app = TestApp::new();

    let response = app
        .put_json(
            "/api/locations/42",
            &location_body("Ghost", 1.0, 1.0, "#FFFFFF"),
        )
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let all: Vec<LocationResponse> = read_json(app.get("/api/locations").await).await;
    assert!(all.is_empty());
}
