//! Stream service
//!
//! Listing, creation, partial update and soft deletion of streams.

use chrono::Utc;
use tracing::{info, instrument};

use onestream_core::value_objects::{Page, StreamId, StreamQuery};

use crate::dto::{CreateStreamRequest, StreamResponse, UpdateStreamRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const UNKNOWN_TYPE_MESSAGE: &str = "The selected stream type id is invalid.";

/// Stream service
pub struct StreamService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StreamService<'a> {
    /// Create a new StreamService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// One page of live streams matching the query
    #[instrument(skip(self))]
    pub async fn list_streams(&self, query: &StreamQuery) -> ServiceResult<Page<StreamResponse>> {
        let page = self.ctx.stream_repo().list(query).await?;
        Ok(page.map(StreamResponse::from))
    }

    /// Get a live stream by ID
    #[instrument(skip(self))]
    pub async fn get_stream(&self, stream_id: StreamId) -> ServiceResult<StreamResponse> {
        let stream = self
            .ctx
            .stream_repo()
            .find_by_id(stream_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Stream", stream_id.to_string()))?;

        Ok(StreamResponse::from(&stream))
    }

    /// Create a stream with a fresh identifier
    #[instrument(skip(self, request))]
    pub async fn create_stream(&self, request: CreateStreamRequest) -> ServiceResult<StreamResponse> {
        let new_stream = request.into_new_stream(Utc::now().naive_utc())?;

        if let Some(type_id) = new_stream.stream_type_id {
            self.ensure_stream_type(type_id).await?;
        }

        let stream = self.ctx.stream_repo().create(&new_stream).await?;
        info!(stream_id = %stream.id, "Stream created");

        Ok(StreamResponse::from(&stream))
    }

    /// Apply a partial update and return the stored state
    #[instrument(skip(self, request))]
    pub async fn update_stream(
        &self,
        stream_id: StreamId,
        request: UpdateStreamRequest,
    ) -> ServiceResult<StreamResponse> {
        // Unknown and soft-deleted ids are not found, whatever the body holds
        if self.ctx.stream_repo().find_by_id(stream_id).await?.is_none() {
            return Err(ServiceError::not_found("Stream", stream_id.to_string()));
        }

        if let Some(type_id) = request.referenced_stream_type() {
            self.ensure_stream_type(type_id).await?;
        }
        let patch = request.into_patch(Utc::now().naive_utc())?;

        let stream = self
            .ctx
            .stream_repo()
            .update(stream_id, &patch)
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    ServiceError::not_found("Stream", stream_id.to_string())
                } else {
                    e.into()
                }
            })?;
        info!(stream_id = %stream_id, "Stream updated");

        Ok(StreamResponse::from(&stream))
    }

    /// Soft delete a stream
    #[instrument(skip(self))]
    pub async fn delete_stream(&self, stream_id: StreamId) -> ServiceResult<()> {
        self.ctx
            .stream_repo()
            .delete(stream_id)
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    ServiceError::not_found("Stream", stream_id.to_string())
                } else {
                    e.into()
                }
            })?;
        info!(stream_id = %stream_id, "Stream deleted");

        Ok(())
    }

    async fn ensure_stream_type(&self, type_id: i64) -> ServiceResult<()> {
        match self.ctx.stream_type_repo().find_by_id(type_id).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::field("stream_type_id", UNKNOWN_TYPE_MESSAGE)),
        }
    }
}
