//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::StreamId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Stream not found: {0}")]
    StreamNotFound(StreamId),

    #[error("Stream type not found: {0}")]
    StreamTypeNotFound(i64),

    #[error("User not found: {0}")]
    UserNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    /// A single offending input field, reported back under `field`
    #[error("{message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("You cannot delete your own account")]
    CannotDeleteSelf,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            message: message.into(),
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::StreamNotFound(_) => "UNKNOWN_STREAM",
            Self::StreamTypeNotFound(_) => "UNKNOWN_STREAM_TYPE",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::InvalidField { .. } => "VALIDATION_ERROR",
            Self::CannotDeleteSelf => "CANNOT_DELETE_SELF",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::StreamNotFound(_) | Self::StreamTypeNotFound(_) | Self::UserNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidField { .. })
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::CannotDeleteSelf)
    }
}
