//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{NewStream, NewUser, Stream, StreamPatch, StreamType, User, UserUpdate};
use crate::error::DomainError;
use crate::value_objects::{Page, StreamId, StreamQuery};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Stream Repository
// ============================================================================

/// Every method ignores soft-deleted streams.
#[async_trait]
pub trait StreamRepository: Send + Sync {
    /// Find a live stream by ID, with its type loaded
    async fn find_by_id(&self, id: StreamId) -> RepoResult<Option<Stream>>;

    /// Filtered, sorted, paginated listing
    async fn list(&self, query: &StreamQuery) -> RepoResult<Page<Stream>>;

    /// Insert a stream and return the stored row
    async fn create(&self, stream: &NewStream) -> RepoResult<Stream>;

    /// Apply a partial update and return the stored row.
    /// Fails with `StreamNotFound` when no live row matches.
    async fn update(&self, id: StreamId, patch: &StreamPatch) -> RepoResult<Stream>;

    /// Soft delete a stream.
    /// Fails with `StreamNotFound` when no live row matches.
    async fn delete(&self, id: StreamId) -> RepoResult<()>;
}

// ============================================================================
// Stream Type Repository
// ============================================================================

#[async_trait]
pub trait StreamTypeRepository: Send + Sync {
    /// List all stream types ordered by ID
    async fn find_all(&self) -> RepoResult<Vec<StreamType>>;

    /// Find stream type by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<StreamType>>;

    /// Check if a name is taken, optionally ignoring one stream type
    async fn name_exists(&self, name: &str, except_id: Option<i64>) -> RepoResult<bool>;

    /// Create a new stream type
    async fn create(&self, name: &str) -> RepoResult<StreamType>;

    /// Rename a stream type
    async fn update(&self, id: i64, name: &str) -> RepoResult<StreamType>;

    /// Hard delete; referencing streams lose their type
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users ordered by ID
    async fn find_all(&self) -> RepoResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by email (case-insensitive)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken (case-insensitive), optionally ignoring one user
    async fn email_exists(&self, email: &str, except_id: Option<i64>) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User>;

    /// Update profile fields, and the password hash when one is given
    async fn update(
        &self,
        id: i64,
        update: &UserUpdate,
        password_hash: Option<&str>,
    ) -> RepoResult<User>;

    /// Hard delete a user
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;
}
