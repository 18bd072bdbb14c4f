//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in onestream-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod query;
mod stream;
mod stream_type;
mod user;

pub use query::StreamQueryBuilder;
pub use stream::PgStreamRepository;
pub use stream_type::PgStreamTypeRepository;
pub use user::PgUserRepository;
