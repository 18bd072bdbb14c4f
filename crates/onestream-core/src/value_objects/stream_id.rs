//! Stream ID - random UUID v4 identifier
//!
//! Stream identifiers are generated once, before the row is inserted, and are
//! never derived from a counter, so they leak nothing about insertion order.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque stream identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StreamId(Uuid);

impl StreamId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    #[inline]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Parse from the textual path form.
    ///
    /// Only the canonical hyphenated form is accepted; anything else is
    /// treated by callers as an unknown stream.
    pub fn parse(s: &str) -> Result<Self, StreamIdParseError> {
        if s.len() != 36 {
            return Err(StreamIdParseError::InvalidFormat);
        }
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| StreamIdParseError::InvalidFormat)
    }
}

/// Error when parsing a StreamId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StreamIdParseError {
    #[error("invalid stream id format")]
    InvalidFormat,
}

impl fmt::Display for StreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl From<Uuid> for StreamId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<StreamId> for Uuid {
    fn from(id: StreamId) -> Self {
        id.0
    }
}

impl std::str::FromStr for StreamId {
    type Err = StreamIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StreamId::parse(s)
    }
}
