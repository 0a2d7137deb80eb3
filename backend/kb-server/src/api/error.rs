//! REST API error types
//!
//! Every failure leaves the server as a flat JSON body with the HTTP status
//! matching the error kind.

use kb_service::ServiceError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const INVALID_REQUEST_DATA: &str = "Invalid request data";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match status {
            StatusCode::INTERNAL_SERVER_ERROR => log::error!("{}", self),
            _ => log::warn!("{}", self),
        }

        let body = match self {
            ApiError::NotFound { message, .. } => ApiErrorResponse {
                error: message,
                code: "NOT_FOUND".into(),
                field: None,
            },
            ApiError::Validation { message, field, .. } => ApiErrorResponse {
                error: message,
                code: "VALIDATION_ERROR".into(),
                field,
            },
            ApiError::Internal { message, .. } => ApiErrorResponse {
                error: message,
                code: "INTERNAL_ERROR".into(),
                field: None,
            },
            ApiError::BadRequest { message, .. } => ApiErrorResponse {
                error: message,
                code: "BAD_REQUEST".into(),
                field: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert service errors to API errors
impl From<ServiceError> for ApiError {
    #[track_caller]
    fn from(e: ServiceError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            ServiceError::NotFound { message, .. } => ApiError::NotFound { message, location },
            ServiceError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            ServiceError::Unexpected { message, .. } => ApiError::Internal { message, location },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
