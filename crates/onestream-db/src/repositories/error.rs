//! Error handling utilities for repositories

use onestream_core::error::DomainError;
use onestream_core::value_objects::StreamId;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

/// Check for foreign key violation and return appropriate error or fallback
pub fn map_foreign_key_violation<F>(e: SqlxError, on_violation: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return on_violation();
        }
    }
    map_db_error(e)
}

pub fn stream_not_found(id: StreamId) -> DomainError {
    DomainError::StreamNotFound(id)
}

pub fn stream_type_not_found(id: i64) -> DomainError {
    DomainError::StreamTypeNotFound(id)
}

pub fn user_not_found(id: i64) -> DomainError {
    DomainError::UserNotFound(id)
}

/// A referenced stream type vanished between validation and the write
pub fn unknown_stream_type() -> DomainError {
    DomainError::invalid_field("stream_type_id", "The selected stream type does not exist.")
}

pub fn name_taken() -> DomainError {
    DomainError::invalid_field("name", "The name has already been taken.")
}

pub fn email_taken() -> DomainError {
    DomainError::invalid_field("email", "The email has already been taken.")
}
