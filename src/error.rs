//! Error taxonomy and HTTP response translation.
//!
//! All handlers return `Result<_, ApiError>`; the [`IntoResponse`]
//! implementation below is the single place where errors become HTTP
//! responses. Store-side failures collapse into a generic 500 whose detail is
//! only logged server-side; credential and upload failures carry their own
//! status codes and stable error identifiers.

use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Errors that can occur while serving a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Query or connection failure against the PostgreSQL store.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Unknown email or failed password comparison on login.
    ///
    /// Both cases map to the same response so the API does not reveal which
    /// emails exist.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Uploaded file is not a PDF.
    #[error("unsupported file type: {content_type}")]
    UnsupportedFileType { content_type: String },

    /// Malformed or oversized multipart request body.
    #[error("multipart error: {0}")]
    Multipart(#[from] MultipartError),

    /// Failed to write an uploaded file to the upload directory.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Stored password hash could not be parsed.
    #[error("password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// A blocking task (password verification) panicked or was cancelled.
    #[error("blocking task error: {0}")]
    Blocking(#[from] tokio::task::JoinError),
}

// =============================================================================
// Response Types
// =============================================================================

/// JSON error response returned for all error conditions.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type identifier (e.g., "invalid_credentials", "server_error")
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code (included for convenience)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ErrorResponse {
    /// Create a new error response.
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status: None,
        }
    }

    /// Create a new error response with status code.
    pub fn with_status(
        error: impl Into<String>,
        message: impl Into<String>,
        status: StatusCode,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status: Some(status.as_u16()),
        }
    }
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Convert ApiError to an HTTP response.
///
/// - 4xx errors are logged at WARN level (client errors)
/// - 5xx errors are logged at ERROR level, with the underlying cause; the
///   response body stays generic
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            ApiError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "invalid_credentials",
                "Invalid credentials".to_string(),
            ),

            ApiError::UnsupportedFileType { content_type } => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "unsupported_file_type",
                format!(
                    "Unsupported file type: {} (only application/pdf is accepted)",
                    content_type
                ),
            ),

            // Multipart errors carry their own status (400 for malformed
            // bodies, 413 when the body limit is exceeded).
            ApiError::Multipart(err) => (err.status(), "invalid_multipart", err.body_text()),

            // Everything store- or host-side is a generic 500. The detail is
            // logged below, never returned to the client.
            ApiError::Database(_)
            | ApiError::Storage(_)
            | ApiError::Hash(_)
            | ApiError::Blocking(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "server_error",
                "Server error".to_string(),
            ),
        };

        if status.is_server_error() {
            error!(
                error_type = error_type,
                status = status.as_u16(),
                "Server error: {}",
                self
            );
        } else if status == StatusCode::UNAUTHORIZED {
            debug!(
                error_type = error_type,
                status = status.as_u16(),
                "Rejected login attempt"
            );
        } else {
            warn!(
                error_type = error_type,
                status = status.as_u16(),
                "Client error: {}",
                message
            );
        }

        let error_response = ErrorResponse::with_status(error_type, message, status);

        (status, Json(error_response)).into_response()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::new("test_error", "Test message");
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("test_error"));
        assert!(json.contains("Test message"));
        assert!(!json.contains("status")); // status is None, should be skipped
    }

    #[test]
    fn test_error_response_with_status() {
        let response = ErrorResponse::with_status(
            "invalid_credentials",
            "Invalid credentials",
            StatusCode::UNAUTHORIZED,
        );
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("401"));
    }

    #[test]
    fn test_invalid_credentials_to_status_code() {
        let response = ApiError::InvalidCredentials.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_unsupported_file_type_to_status_code() {
        let err = ApiError::UnsupportedFileType {
            content_type: "image/png".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[test]
    fn test_database_error_to_status_code() {
        let err = ApiError::Database(sqlx::Error::RowNotFound);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_storage_error_to_status_code() {
        let err = ApiError::Storage(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_server_errors_share_generic_identifier() {
        // The body must not leak which store-side failure occurred.
        for err in [
            ApiError::Database(sqlx::Error::PoolClosed),
            ApiError::Storage(std::io::Error::new(std::io::ErrorKind::Other, "disk full")),
        ] {
            let response = err.into_response();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
