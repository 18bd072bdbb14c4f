//! Stream database model

use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Row of `streams` LEFT JOINed to `stream_types`
#[derive(Debug, Clone, FromRow)]
pub struct StreamModel {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub tokens_price: i64,
    pub stream_type_id: Option<i64>,
    pub date_expiration: NaiveDateTime,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub type_name: Option<String>,
    pub type_created_at: Option<DateTime<Utc>>,
    pub type_updated_at: Option<DateTime<Utc>>,
}
