//! Stream type entity - a named category optionally attached to streams

use chrono::{DateTime, Utc};

/// Stream type (category) entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamType {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StreamType {
    pub fn new(id: i64, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            created_at: now,
            updated_at: now,
        }
    }
}
