//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    response::IntoResponse,
    routing::get,
    Router,
};

use super::handlers;
use crate::infrastructure::metrics;
use crate::presentation::middleware::{rate_limit_api, track_metrics};
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes(state.clone()))
        // Health check endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/health/live", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        // Prometheus metrics endpoint
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Prometheus metrics endpoint handler
async fn metrics_handler() -> impl IntoResponse {
    let metrics = metrics::gather_metrics();
    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        metrics,
    )
}

/// API routes, rate limited per client
fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/locations",
            get(handlers::location::list_locations).post(handlers::location::create_location),
        )
        .route(
            "/locations/{id}",
            get(handlers::location::get_location).put(handlers::location::edit_location),
        )
        .route("/route", get(handlers::location::get_route))
        .route_layer(middleware::from_fn_with_state(state, rate_limit_api))
}
