//! Value objects - immutable types that represent domain concepts

mod expiration;
mod page;
mod query;
mod stream_id;

pub use expiration::{format_timestamp, parse_expiration, ExpirationError, TIMESTAMP_FORMAT};
pub use page::Page;
pub use query::{SortDirection, SortField, StreamQuery, StreamSort};
pub use stream_id::{StreamId, StreamIdParseError};
