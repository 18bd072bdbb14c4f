//! Stream type handlers

use axum::{extract::State, Json};
use onestream_service::dto::{StreamTypeRequest, StreamTypeResponse};
use onestream_service::StreamTypeService;

use crate::extractors::{IdPath, JsonBody};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /stream-types
pub async fn list_stream_types(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<StreamTypeResponse>>> {
    let service = StreamTypeService::new(state.service_context());
    Ok(Json(service.list_stream_types().await?))
}

/// POST /stream-types
pub async fn create_stream_type(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<StreamTypeRequest>,
) -> ApiResult<Created<Json<StreamTypeResponse>>> {
    let service = StreamTypeService::new(state.service_context());
    let stream_type = service.create_stream_type(request).await?;
    Ok(Created(Json(stream_type)))
}

/// GET /stream-types/{id}
pub async fn get_stream_type(
    State(state): State<AppState>,
    IdPath(type_id): IdPath,
) -> ApiResult<Json<StreamTypeResponse>> {
    let service = StreamTypeService::new(state.service_context());
    Ok(Json(service.get_stream_type(type_id).await?))
}

/// PUT/PATCH /stream-types/{id}
pub async fn update_stream_type(
    State(state): State<AppState>,
    IdPath(type_id): IdPath,
    JsonBody(request): JsonBody<StreamTypeRequest>,
) -> ApiResult<Json<StreamTypeResponse>> {
    let service = StreamTypeService::new(state.service_context());
    Ok(Json(service.update_stream_type(type_id, request).await?))
}

/// DELETE /stream-types/{id}
pub async fn delete_stream_type(
    State(state): State<AppState>,
    IdPath(type_id): IdPath,
) -> ApiResult<NoContent> {
    let service = StreamTypeService::new(state.service_context());
    service.delete_stream_type(type_id).await?;
    Ok(NoContent)
}
