//! Stream type service
//!
//! Handles the stream category catalogue.

use tracing::{info, instrument};

use crate::dto::{StreamTypeRequest, StreamTypeResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const NAME_TAKEN_MESSAGE: &str = "The name has already been taken.";

/// Stream type service
pub struct StreamTypeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StreamTypeService<'a> {
    /// Create a new StreamTypeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All stream types ordered by ID
    #[instrument(skip(self))]
    pub async fn list_stream_types(&self) -> ServiceResult<Vec<StreamTypeResponse>> {
        let types = self.ctx.stream_type_repo().find_all().await?;
        Ok(types.iter().map(StreamTypeResponse::from).collect())
    }

    /// Get stream type by ID
    #[instrument(skip(self))]
    pub async fn get_stream_type(&self, type_id: i64) -> ServiceResult<StreamTypeResponse> {
        let stream_type = self
            .ctx
            .stream_type_repo()
            .find_by_id(type_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Stream type", type_id.to_string()))?;

        Ok(StreamTypeResponse::from(&stream_type))
    }

    /// Create a stream type with a unique name
    #[instrument(skip(self, request))]
    pub async fn create_stream_type(
        &self,
        request: StreamTypeRequest,
    ) -> ServiceResult<StreamTypeResponse> {
        let name = request.into_name()?;

        if self.ctx.stream_type_repo().name_exists(&name, None).await? {
            return Err(ServiceError::field("name", NAME_TAKEN_MESSAGE));
        }

        let stream_type = self.ctx.stream_type_repo().create(&name).await?;
        info!(type_id = stream_type.id, "Stream type created");

        Ok(StreamTypeResponse::from(&stream_type))
    }

    /// Rename a stream type
    #[instrument(skip(self, request))]
    pub async fn update_stream_type(
        &self,
        type_id: i64,
        request: StreamTypeRequest,
    ) -> ServiceResult<StreamTypeResponse> {
        let repo = self.ctx.stream_type_repo();

        if repo.find_by_id(type_id).await?.is_none() {
            return Err(ServiceError::not_found("Stream type", type_id.to_string()));
        }

        let name = request.into_name()?;
        if repo.name_exists(&name, Some(type_id)).await? {
            return Err(ServiceError::field("name", NAME_TAKEN_MESSAGE));
        }

        let stream_type = repo.update(type_id, &name).await?;
        info!(type_id, "Stream type updated");

        Ok(StreamTypeResponse::from(&stream_type))
    }

    /// Hard delete; streams of this type keep existing without a type
    #[instrument(skip(self))]
    pub async fn delete_stream_type(&self, type_id: i64) -> ServiceResult<()> {
        self.ctx
            .stream_type_repo()
            .delete(type_id)
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    ServiceError::not_found("Stream type", type_id.to_string())
                } else {
                    e.into()
                }
            })?;
        info!(type_id, "Stream type deleted");

        Ok(())
    }
}
