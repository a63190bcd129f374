//! API error type with IntoResponse
//!
//! Every failure a handler can hit lands in exactly one variant:
//! validation (422 + messages), not found (404), anything else (500, logged).
//! Bodies are empty except for validation messages.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::models::ValidationError;
use crate::store::StoreError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Body failed its schema (422)
    Validation(ValidationError),

    /// Referenced tweet doesn't exist (404)
    NotFound,

    /// Anything else (500, logged, details withheld)
    Internal { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Validation(e) => (status, Json(e.messages())).into_response(),
            Self::NotFound => status.into_response(),
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                status.into_response()
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound { resource, id } => {
                tracing::debug!(resource, %id, "not found");
                Self::NotFound
            }
            other => Self::Internal {
                message: other.to_string(),
            },
        }
    }
}
