//! Custom error types for the users service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Custom error type for the users service
#[derive(Error, Debug)]
pub enum ApiError {
    /// No user exists under the requested id
    #[error("Not found: {0}")]
    NotFound(String),

    /// A present field failed its format or range check
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// A committed value collides with another record's unique field
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error
    #[error("Internal server error")]
    InternalServerError,
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                // The driver message names columns and constraint internals;
                // log it and hand the client a generic conflict instead.
                tracing::error!("Unique constraint violation: {}", db_err);
                return ApiError::Conflict("Email or phone number already in use".to_string());
            }
        }

        tracing::error!("Database error: {}", err);
        ApiError::InternalServerError
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Validation { field, reason } => {
                (StatusCode::BAD_REQUEST, format!("{}: {}", field, reason))
            }
            ApiError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InternalServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
