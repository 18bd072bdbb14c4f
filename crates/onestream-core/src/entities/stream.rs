//! Stream entity - a sellable media listing priced in tokens

use chrono::{DateTime, NaiveDateTime, Utc};

use super::StreamType;
use crate::value_objects::StreamId;

/// Live (not soft-deleted) stream with its category loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stream {
    pub id: StreamId,
    pub title: String,
    pub description: Option<String>,
    pub tokens_price: i64,
    pub stream_type: Option<StreamType>,
    /// Wall-clock UTC, stored without an offset
    pub date_expiration: NaiveDateTime,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Stream {
    #[inline]
    pub fn stream_type_id(&self) -> Option<i64> {
        self.stream_type.as_ref().map(|t| t.id)
    }
}

/// Validated field set for inserting a stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStream {
    pub id: StreamId,
    pub title: String,
    pub description: Option<String>,
    pub tokens_price: i64,
    pub stream_type_id: Option<i64>,
    pub date_expiration: NaiveDateTime,
}

impl NewStream {
    /// Build an insert with a freshly generated identifier
    pub fn new(
        title: String,
        description: Option<String>,
        tokens_price: i64,
        stream_type_id: Option<i64>,
        date_expiration: NaiveDateTime,
    ) -> Self {
        Self {
            id: StreamId::generate(),
            title,
            description,
            tokens_price,
            stream_type_id,
            date_expiration,
        }
    }
}

/// Partial update of a stream.
///
/// `None` leaves a column untouched. For the nullable columns the inner
/// option distinguishes "clear" (`Some(None)`) from "set".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub tokens_price: Option<i64>,
    pub stream_type_id: Option<Option<i64>>,
    pub date_expiration: Option<NaiveDateTime>,
}

impl StreamPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.tokens_price.is_none()
            && self.stream_type_id.is_none()
            && self.date_expiration.is_none()
    }

    /// Apply the patch to an in-memory stream.
    ///
    /// `stream_type` resolves a type id to the loaded type; repositories that
    /// persist the patch return the stored row instead.
    pub fn apply_to(&self, stream: &mut Stream, stream_type: Option<StreamType>) {
        if let Some(title) = &self.title {
            stream.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            stream.description.clone_from(description);
        }
        if let Some(price) = self.tokens_price {
            stream.tokens_price = price;
        }
        if self.stream_type_id.is_some() {
            stream.stream_type = stream_type;
        }
        if let Some(expiration) = self.date_expiration {
            stream.date_expiration = expiration;
        }
        stream.updated_at = Utc::now();
    }
}
