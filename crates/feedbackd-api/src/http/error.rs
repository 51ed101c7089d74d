//! Application error type mapping to HTTP status codes.
//!
//! Every error body is a flat `{"error": message}` object. Validation
//! maps to 400 with the violated rule's text, auth failures to 401, and
//! storage failures to 500 with a generic message -- the underlying
//! cause is logged server-side, never sent to the client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use feedbackd_types::error::{AuthError, FeedbackError, StorageError, ValidationError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Client input malformed: 400.
    Validation(ValidationError),
    /// Credential mismatch or missing/malformed token: 401.
    Auth(AuthError),
    /// Underlying persistence failure: 500.
    Storage(StorageError),
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e)
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        AppError::Auth(e)
    }
}

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        AppError::Storage(e)
    }
}

impl From<FeedbackError> for AppError {
    fn from(e: FeedbackError) -> Self {
        match e {
            FeedbackError::Validation(v) => AppError::Validation(v),
            FeedbackError::Storage(s) => AppError::Storage(s),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::Auth(e) => (StatusCode::UNAUTHORIZED, e.to_string()),
            AppError::Storage(e) => {
                tracing::error!(error = %e, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to access feedback storage".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
