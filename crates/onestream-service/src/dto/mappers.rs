//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use onestream_core::entities::{Stream, StreamType, User};
use onestream_core::value_objects::{format_timestamp, TIMESTAMP_FORMAT};

use super::responses::{StreamResponse, StreamTypeResponse, StreamTypeSummary, UserResponse};

// ============================================================================
// Stream Mappers
// ============================================================================

impl From<&Stream> for StreamResponse {
    fn from(stream: &Stream) -> Self {
        Self {
            id: stream.id.to_string(),
            title: stream.title.clone(),
            description: stream.description.clone(),
            tokens_price: stream.tokens_price,
            stream_type: stream.stream_type.as_ref().map(StreamTypeSummary::from),
            date_expiration: stream.date_expiration.format(TIMESTAMP_FORMAT).to_string(),
            created_at: format_timestamp(&stream.created_at),
            updated_at: format_timestamp(&stream.updated_at),
        }
    }
}

impl From<Stream> for StreamResponse {
    fn from(stream: Stream) -> Self {
        Self::from(&stream)
    }
}

// ============================================================================
// Stream Type Mappers
// ============================================================================

impl From<&StreamType> for StreamTypeSummary {
    fn from(stream_type: &StreamType) -> Self {
        Self {
            id: stream_type.id,
            name: stream_type.name.clone(),
        }
    }
}

impl From<&StreamType> for StreamTypeResponse {
    fn from(stream_type: &StreamType) -> Self {
        Self {
            id: stream_type.id,
            name: stream_type.name.clone(),
            created_at: format_timestamp(&stream_type.created_at),
            updated_at: format_timestamp(&stream_type.updated_at),
        }
    }
}

impl From<StreamType> for StreamTypeResponse {
    fn from(stream_type: StreamType) -> Self {
        Self::from(&stream_type)
    }
}

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            email_verified_at: user.email_verified_at.as_ref().map(format_timestamp),
            created_at: format_timestamp(&user.created_at),
            updated_at: format_timestamp(&user.updated_at),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}
