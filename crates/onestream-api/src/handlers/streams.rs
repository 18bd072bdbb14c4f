//! Stream handlers
//!
//! Listing, creation, update and soft deletion of streams.

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    Json,
};
use onestream_service::dto::{
    normalize_stream_query, ApiResponse, CreateStreamRequest, PaginatedResponse, StreamResponse,
    UpdateStreamRequest,
};
use onestream_service::StreamService;

use crate::extractors::{JsonBody, StreamIdPath};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Base path used in pagination links
pub const STREAMS_PATH: &str = "/api/streams";

/// List streams
///
/// GET /streams?search=&type=&sort=&page=&per_page=
pub async fn list_streams(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<PaginatedResponse<StreamResponse>>> {
    let query = normalize_stream_query(&params, state.service_context().pagination())?;

    let service = StreamService::new(state.service_context());
    let page = service.list_streams(&query).await?;
    Ok(Json(PaginatedResponse::from_page(page, STREAMS_PATH)))
}

/// Create a stream
///
/// POST /streams
pub async fn create_stream(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateStreamRequest>,
) -> ApiResult<Created<Json<ApiResponse<StreamResponse>>>> {
    let service = StreamService::new(state.service_context());
    let stream = service.create_stream(request).await?;
    Ok(Created(Json(ApiResponse::new(stream))))
}

/// Get a stream
///
/// GET /streams/{id}
pub async fn get_stream(
    State(state): State<AppState>,
    StreamIdPath(stream_id): StreamIdPath,
) -> ApiResult<Json<ApiResponse<StreamResponse>>> {
    let service = StreamService::new(state.service_context());
    let stream = service.get_stream(stream_id).await?;
    Ok(Json(ApiResponse::new(stream)))
}

/// Update a stream
///
/// PUT/PATCH /streams/{id}
pub async fn update_stream(
    State(state): State<AppState>,
    StreamIdPath(stream_id): StreamIdPath,
    JsonBody(request): JsonBody<UpdateStreamRequest>,
) -> ApiResult<Json<ApiResponse<StreamResponse>>> {
    let service = StreamService::new(state.service_context());
    let stream = service.update_stream(stream_id, request).await?;
    Ok(Json(ApiResponse::new(stream)))
}

/// Soft delete a stream
///
/// DELETE /streams/{id}
pub async fn delete_stream(
    State(state): State<AppState>,
    StreamIdPath(stream_id): StreamIdPath,
) -> ApiResult<NoContent> {
    let service = StreamService::new(state.service_context());
    service.delete_stream(stream_id).await?;
    Ok(NoContent)
}
