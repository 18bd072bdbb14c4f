//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] and orchestrates
//! validation and repository calls for one resource.

pub mod auth;
pub mod context;
pub mod error;
pub mod stream;
pub mod stream_type;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{FieldErrors, ServiceError, ServiceResult};
pub use stream::StreamService;
pub use stream_type::StreamTypeService;
pub use user::UserService;
