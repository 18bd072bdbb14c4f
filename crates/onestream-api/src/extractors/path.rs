//! Path parameter extractors
//!
//! A path id that cannot name a record is reported as 404, the same as an
//! id that names nothing.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use onestream_core::value_objects::StreamId;

use crate::response::ApiError;

/// Stream identifier from the `:id` segment
#[derive(Debug, Clone, Copy)]
pub struct StreamIdPath(pub StreamId);

#[async_trait]
impl<S> FromRequestParts<S> for StreamIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound("Stream"))?;

        parse_stream_id(&raw).map(StreamIdPath)
    }
}

/// Integer identifier from the `:id` segment
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound("Resource"))?;

        parse_id(&raw).map(IdPath)
    }
}

fn parse_stream_id(raw: &str) -> Result<StreamId, ApiError> {
    StreamId::parse(raw).map_err(|_| ApiError::NotFound("Stream"))
}

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or(ApiError::NotFound("Resource"))
}
