//! Database models - SQLx-compatible structs for PostgreSQL tables

mod stream;
mod stream_type;
mod user;

pub use stream::StreamModel;
pub use stream_type::StreamTypeModel;
pub use user::UserModel;
