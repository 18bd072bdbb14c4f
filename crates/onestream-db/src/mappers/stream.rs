//! Stream model -> entity mapper

use onestream_core::entities::{Stream, StreamType};
use onestream_core::value_objects::StreamId;

use crate::models::StreamModel;

/// Convert a joined stream row to a Stream entity.
///
/// The type is attached only when the join produced a complete row.
impl From<StreamModel> for Stream {
    fn from(model: StreamModel) -> Self {
        let stream_type = match (
            model.stream_type_id,
            model.type_name,
            model.type_created_at,
            model.type_updated_at,
        ) {
            (Some(id), Some(name), Some(created_at), Some(updated_at)) => Some(StreamType {
                id,
                name,
                created_at,
                updated_at,
            }),
            _ => None,
        };

        Stream {
            id: StreamId::from_uuid(model.id),
            title: model.title,
            description: model.description,
            tokens_price: model.tokens_price,
            stream_type,
            date_expiration: model.date_expiration,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
