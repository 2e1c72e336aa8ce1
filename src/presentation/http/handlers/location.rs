//! Location Handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};

use crate::application::dto::request::{LocationRequest, RouteQueryParams};
use crate::application::dto::response::LocationResponse;
use crate::infrastructure::metrics;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create a location
pub async fn create_location(
    State(state): State<AppState>,
    body: Result<Json<LocationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LocationResponse>), AppError> {
    let Json(body) = body.map_err(invalid_body)?;

    let location = state.locations.create_location(body.into()).await?;

    Ok((StatusCode::CREATED, Json(LocationResponse::from(location))))
}

/// List all locations
pub async fn list_locations(
    State(state): State<AppState>,
) -> Result<Json<Vec<LocationResponse>>, AppError> {
    let locations = state.locations.get_all_locations().await?;

    Ok(Json(LocationResponse::from_list(locations)))
}

/// Get a location by ID
pub async fn get_location(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<LocationResponse>, AppError> {
    let Path(id) = id.map_err(invalid_id)?;

    let location = state.locations.get_location_by_id(id).await?;

    Ok(Json(LocationResponse::from(location)))
}

/// Replace every field of an existing location
pub async fn edit_location(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<LocationRequest>, JsonRejection>,
) -> Result<Json<LocationResponse>, AppError> {
    let Path(id) = id.map_err(invalid_id)?;
    let Json(body) = body.map_err(invalid_body)?;

    let location = state.locations.update_location(id, body.into()).await?;

    Ok(Json(LocationResponse::from(location)))
}

/// Every location ordered nearest-first from `lat`/`lon`
pub async fn get_route(
    State(state): State<AppState>,
    params: Result<Query<RouteQueryParams>, QueryRejection>,
) -> Result<Json<Vec<LocationResponse>>, AppError> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;
    let target = params
        .target()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let route = state.locations.calculate_route(target).await?;
    metrics::record_route(route.len());

    Ok(Json(LocationResponse::from_list(route)))
}

fn invalid_body(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
}

fn invalid_id(rejection: PathRejection) -> AppError {
    tracing::debug!("Rejected location id: {}", rejection.body_text());
    AppError::BadRequest("Invalid location ID".into())
}
