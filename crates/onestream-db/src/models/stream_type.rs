//! Stream type database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for stream_types table
#[derive(Debug, Clone, FromRow)]
pub struct StreamTypeModel {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
