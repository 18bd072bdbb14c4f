//! Domain entities - core business objects

mod stream;
mod stream_type;
mod user;

pub use stream::{NewStream, Stream, StreamPatch};
pub use stream_type::StreamType;
pub use user::{NewUser, User, UserUpdate};
