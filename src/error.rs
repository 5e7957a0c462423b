/// Unified error types for the media logger service
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned for every failed login, whatever the cause
pub const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Main error type for the service
#[derive(Error, Debug)]
pub enum MediaError {
    /// Malformed or missing input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Bad credentials or a bad/missing session
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Referenced account or media item does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Duplicate identifier on create
    #[error("Conflict: {0}")]
    Conflict(String),

    /// JSON encode/decode failures
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MediaError {
    /// The single undifferentiated login failure
    pub fn invalid_credentials() -> Self {
        MediaError::Authentication(INVALID_CREDENTIALS.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            MediaError::Validation(_) => StatusCode::BAD_REQUEST,
            MediaError::Authentication(_) => StatusCode::UNAUTHORIZED,
            MediaError::NotFound(_) => StatusCode::NOT_FOUND,
            MediaError::Conflict(_) => StatusCode::CONFLICT,
            MediaError::Serialization(_) | MediaError::Internal(_) | MediaError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for MediaError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (error_code, message) = match &self {
            MediaError::Validation(_) => ("InvalidRequest", self.to_string()),
            MediaError::Authentication(_) => ("AuthenticationRequired", self.to_string()),
            MediaError::NotFound(_) => ("NotFound", self.to_string()),
            MediaError::Conflict(_) => ("Conflict", self.to_string()),
            MediaError::Serialization(_) | MediaError::Internal(_) | MediaError::Io(_) => {
                tracing::error!("internal failure: {}", self);
                (
                    "InternalServerError",
                    "Internal server error".to_string(), // Don't leak details
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_code.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for service operations
pub type MediaResult<T> = Result<T, MediaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            MediaError::Validation("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            MediaError::invalid_credentials().status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(MediaError::NotFound("x".into()).status(), StatusCode::NOT_FOUND);
        assert_eq!(MediaError::Conflict("x".into()).status(), StatusCode::CONFLICT);
        assert_eq!(
            MediaError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_serialization_error_is_internal() {
        let err: MediaError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, MediaError::Serialization(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_credentials_message() {
        assert_eq!(
            MediaError::invalid_credentials().to_string(),
            "Authentication failed: Invalid username or password"
        );
    }
}
