//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, and path identifiers.

mod auth;
mod path;
mod validated;

pub use auth::{AuthUser, OptionalAuthUser};
pub use path::{IdPath, StreamIdPath};
pub use validated::{JsonBody, ValidatedJson};
