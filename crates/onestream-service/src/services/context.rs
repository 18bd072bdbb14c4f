//! Service context - dependency container for services
//!
//! Holds the repositories, the token service and listing bounds needed by services.

use std::sync::Arc;

use onestream_common::{JwtService, PaginationConfig};
use onestream_core::traits::{StreamRepository, StreamTypeRepository, UserRepository};
use onestream_db::{PgPool, PgStreamRepository, PgStreamTypeRepository, PgUserRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
/// - Page-size bounds for listings
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    stream_repo: Arc<dyn StreamRepository>,
    stream_type_repo: Arc<dyn StreamTypeRepository>,
    user_repo: Arc<dyn UserRepository>,

    // Services
    jwt_service: Arc<JwtService>,

    pagination: PaginationConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        stream_repo: Arc<dyn StreamRepository>,
        stream_type_repo: Arc<dyn StreamTypeRepository>,
        user_repo: Arc<dyn UserRepository>,
        jwt_service: Arc<JwtService>,
        pagination: PaginationConfig,
    ) -> Self {
        Self {
            pool,
            stream_repo,
            stream_type_repo,
            user_repo,
            jwt_service,
            pagination,
        }
    }

    /// Context backed by the PostgreSQL repositories
    pub fn postgres(pool: PgPool, jwt_service: Arc<JwtService>, pagination: PaginationConfig) -> Self {
        Self::new(
            pool.clone(),
            Arc::new(PgStreamRepository::new(pool.clone())),
            Arc::new(PgStreamTypeRepository::new(pool.clone())),
            Arc::new(PgUserRepository::new(pool)),
            jwt_service,
            pagination,
        )
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the stream repository
    pub fn stream_repo(&self) -> &dyn StreamRepository {
        self.stream_repo.as_ref()
    }

    /// Get the stream type repository
    pub fn stream_type_repo(&self) -> &dyn StreamTypeRepository {
        self.stream_type_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Page-size bounds applied to listings
    pub fn pagination(&self) -> PaginationConfig {
        self.pagination
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("pagination", &self.pagination)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    stream_repo: Option<Arc<dyn StreamRepository>>,
    stream_type_repo: Option<Arc<dyn StreamTypeRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    pagination: Option<PaginationConfig>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn stream_repo(mut self, repo: Arc<dyn StreamRepository>) -> Self {
        self.stream_repo = Some(repo);
        self
    }

    pub fn stream_type_repo(mut self, repo: Arc<dyn StreamTypeRepository>) -> Self {
        self.stream_type_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn pagination(mut self, pagination: PaginationConfig) -> Self {
        self.pagination = Some(pagination);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool.ok_or_else(|| ServiceError::internal("pool is required"))?,
            self.stream_repo.ok_or_else(|| ServiceError::internal("stream_repo is required"))?,
            self.stream_type_repo
                .ok_or_else(|| ServiceError::internal("stream_type_repo is required"))?,
            self.user_repo.ok_or_else(|| ServiceError::internal("user_repo is required"))?,
            self.jwt_service.ok_or_else(|| ServiceError::internal("jwt_service is required"))?,
            self.pagination.unwrap_or_default(),
        ))
    }
}
