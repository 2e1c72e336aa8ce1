//! Validation Utilities

use crate::domain::ValidationError;

use super::error::{AppError, FieldError};

/// Convert validation errors to AppError
pub fn validation_error(errors: ValidationError) -> AppError {
    let field_errors: Vec<FieldError> = errors
        .violations()
        .iter()
        .map(|v| FieldError {
            field: v.field.to_string(),
            message: v.message.clone(),
        })
        .collect();

    AppError::Validation {
        message: errors.to_string(),
        errors: field_errors,
    }
}
