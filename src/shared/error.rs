//! Application Error Types
//!
//! Centralized error handling with Axum integration.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::application::services::LocationError;

use super::validation::validation_error;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

/// Field-level validation error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl From<LocationError> for AppError {
    fn from(err: LocationError) -> Self {
        match err {
            LocationError::Validation(e) => validation_error(e),
            LocationError::NotFound(id) => AppError::NotFound(format!("Location {} not found", id)),
            LocationError::Storage(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, errors) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, 10001, msg, None),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, 10002, msg, None),
            AppError::Validation { message, errors } => {
                (StatusCode::BAD_REQUEST, 10007, message, Some(errors))
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    10000,
                    "Internal server error".into(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            code,
            message,
            errors,
        };

        (status, Json(body)).into_response()
    }
}
