/**
 * API Error Types
 *
 * This module defines the error taxonomy used by the HTTP handlers.
 * Every failure path in the API maps onto exactly one of these
 * variants, and every variant maps onto exactly one HTTP status code.
 *
 * # Error Categories
 *
 * - Validation errors (missing/empty required fields) - 400
 * - Authorization errors (bad credentials, missing token) - 401
 * - Method not allowed - 405
 * - Conflict errors (duplicate user) - 409
 * - Configuration errors (missing connection string) - 500
 * - Uncaught store/parsing failures - 500, message carries the raw
 *   failure detail (part of the published contract; the information
 *   disclosure is a known property, not an accident)
 */

use axum::http::StatusCode;
use thiserror::Error;

/// API error type
///
/// Each variant carries the message returned to the client verbatim in
/// the `{"error": ...}` response body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or empty required request fields
    #[error("{message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// Bad credentials or missing token
    #[error("{message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Resource already exists (duplicate user)
    #[error("{message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// HTTP method not supported by the endpoint
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Server-side configuration missing (database connection string)
    #[error("{message}")]
    Config {
        /// Human-readable error message
        message: String,
    },

    /// Uncaught failure (store error, malformed body, parse failure)
    #[error("{message}")]
    Internal {
        /// Human-readable error message, includes the failure detail
        message: String,
    },
}

impl ApiError {
    /// Create a validation error (400)
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an authorization error (401)
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Create a conflict error (409)
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a configuration error (500)
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an internal error (500)
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message returned to the client
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<sqlx::Error> for ApiError {
    /// Store failures surface as 500 with the raw detail in the message
    fn from(e: sqlx::Error) -> Self {
        Self::Internal {
            message: format!("Server error: {}", e),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    /// Malformed request bodies surface as 500, like any other
    /// uncaught failure
    fn from(e: serde_json::Error) -> Self {
        Self::Internal {
            message: format!("Server error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::unauthorized("x").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::conflict("x").status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::config("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::internal("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_message_passthrough() {
        let err = ApiError::validation("Username and password required");
        assert_eq!(err.message(), "Username and password required");

        assert_eq!(ApiError::MethodNotAllowed.message(), "Method not allowed");
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: ApiError = parse_err.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.message().starts_with("Server error: "));
    }

    #[test]
    fn test_from_sqlx_error() {
        let err: ApiError = sqlx::Error::RowNotFound.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.message().starts_with("Server error: "));
    }
}
