//! # onestream-core
//!
//! Domain layer containing entities, value objects and repository traits for
//! the stream catalogue. This crate has no dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{NewStream, NewUser, Stream, StreamPatch, StreamType, User, UserUpdate};
pub use error::DomainError;
pub use traits::{RepoResult, StreamRepository, StreamTypeRepository, UserRepository};
pub use value_objects::{
    format_timestamp, parse_expiration, ExpirationError, Page, SortDirection, SortField,
    StreamId, StreamIdParseError, StreamQuery, StreamSort, TIMESTAMP_FORMAT,
};
