//! Stream type model -> entity mapper

use onestream_core::entities::StreamType;

use crate::models::StreamTypeModel;

impl From<StreamTypeModel> for StreamType {
    fn from(model: StreamTypeModel) -> Self {
        StreamType {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
