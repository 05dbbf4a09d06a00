//! Application error types
//!
//! Transport-facing error shared by everything above the domain layer.

use clan_core::{DomainError, ErrorKind};
use serde::Serialize;
use std::fmt;

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Resource errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    // Store errors
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Coarse kind, shared with the domain taxonomy
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Forbidden(_) => ErrorKind::Forbidden,
            Self::InvalidState(_) => ErrorKind::InvalidState,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::ConstraintViolation(_) => ErrorKind::ConstraintViolation,
            Self::Database(_) | Self::Internal(_) | Self::Config(_) => ErrorKind::Internal,
            Self::Domain(e) => e.kind(),
        }
    }

    /// Get HTTP status code for this error
    ///
    /// Store constraint violations stay in the 5xx range.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        status_for(self.kind())
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::InvalidState(_) => "INVALID_STATE",
            Self::Conflict(_) => "CONFLICT",
            Self::ConstraintViolation(_) => "CONSTRAINT_VIOLATION",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        let status = self.status_code();
        (400..500).contains(&status)
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        let status = self.status_code();
        (500..600).contains(&status)
    }

    /// Create a not found error for a resource type
    #[must_use]
    pub fn not_found(resource: impl fmt::Display) -> Self {
        Self::NotFound(resource.to_string())
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(msg: impl fmt::Display) -> Self {
        Self::Validation(msg.to_string())
    }

    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// HTTP status for an error kind
#[must_use]
pub fn status_for(kind: ErrorKind) -> u16 {
    match kind {
        ErrorKind::Validation => 400,
        ErrorKind::Forbidden => 403,
        ErrorKind::NotFound => 404,
        ErrorKind::Conflict => 409,
        ErrorKind::InvalidState => 422,
        ErrorKind::ConstraintViolation | ErrorKind::Internal => 500,
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

/// Error response structure for API responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self {
            code: err.error_code().to_string(),
            message: err.to_string(),
            details: None,
        }
    }
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        Self::from(&err)
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::Validation("test".to_string()).status_code(), 400);
        assert_eq!(AppError::Forbidden("level".to_string()).status_code(), 403);
        assert_eq!(AppError::NotFound("clan".to_string()).status_code(), 404);
        assert_eq!(AppError::Conflict("membership".to_string()).status_code(), 409);
        assert_eq!(AppError::InvalidState("denied".to_string()).status_code(), 422);
        assert_eq!(AppError::Database("test".to_string()).status_code(), 500);
    }

    #[test]
    fn test_constraint_violation_is_server_error() {
        let err = AppError::from(DomainError::ConstraintViolation("public_id too long".into()));
        assert_eq!(err.status_code(), 500);
        assert!(err.is_server_error());
        assert_eq!(err.error_code(), "CONSTRAINT_VIOLATION");
    }

    #[test]
    fn test_domain_errors_follow_their_kind() {
        let err = AppError::from(DomainError::ClanNotFound("x".into()));
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "UNKNOWN_CLAN");

        let err = AppError::from(DomainError::InsufficientLevel {
            action: "accept applications",
            required: 5,
        });
        assert_eq!(err.status_code(), 403);

        let err = AppError::from(DomainError::MembershipAlreadyExists);
        assert_eq!(err.kind(), ErrorKind::InvalidState);

        let err = AppError::from(DomainError::ConcurrentModification("membership 1".into()));
        assert_eq!(err.status_code(), 409);
    }

    #[test]
    fn test_is_client_error() {
        assert!(AppError::NotFound("test".to_string()).is_client_error());
        assert!(!AppError::Database("test".to_string()).is_client_error());
    }

    #[test]
    fn test_error_response() {
        let err = AppError::NotFound("player".to_string());
        let response = ErrorResponse::from(&err);

        assert_eq!(response.code, "NOT_FOUND");
        assert_eq!(response.message, "Resource not found: player");
        assert!(response.details.is_none());
    }

    #[test]
    fn test_helper_methods() {
        let err = AppError::not_found("player 123");
        assert_eq!(err.to_string(), "Resource not found: player 123");

        let err = AppError::validation("public_id is required");
        assert_eq!(err.to_string(), "Validation error: public_id is required");
    }
}
