//! # HTTP Errors
//!
//! Converts handler and extractor failures into JSON error responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::handler::{ErrorBody, ItemError};

/// Error tag for bodies rejected before reaching the handler
pub const VALIDATION_ERROR_TAG: &str = "ValidationError";
/// Error tag for unexpected server failures
pub const INTERNAL_ERROR_TAG: &str = "InternalError";

/// Errors surfaced by the HTTP layer
#[derive(Debug, Error)]
pub enum ApiError {
    /// Handler-level error, passed through unchanged
    #[error(transparent)]
    Item(#[from] ItemError),

    /// Request body could not be turned into a domain type
    #[error("{message}")]
    InvalidBody { status: StatusCode, message: String },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Item(err) => StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            ApiError::InvalidBody { status, .. } => *status,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorBody {
        match self {
            ApiError::Item(err) => ErrorBody::from(err),
            ApiError::InvalidBody { message, .. } => ErrorBody {
                error: VALIDATION_ERROR_TAG.to_string(),
                description: message.clone(),
                item_id: String::new(),
            },
            ApiError::Internal(message) => ErrorBody {
                error: INTERNAL_ERROR_TAG.to_string(),
                description: message.clone(),
                item_id: String::new(),
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.body());
        (status, body).into_response()
    }
}
