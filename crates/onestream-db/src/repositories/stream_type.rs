//! PostgreSQL implementation of StreamTypeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use onestream_core::entities::StreamType;
use onestream_core::traits::{RepoResult, StreamTypeRepository};

use crate::models::StreamTypeModel;

use super::error::{map_db_error, map_unique_violation, name_taken, stream_type_not_found};

/// PostgreSQL implementation of StreamTypeRepository
#[derive(Clone)]
pub struct PgStreamTypeRepository {
    pool: PgPool,
}

impl PgStreamTypeRepository {
    /// Create a new PgStreamTypeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StreamTypeRepository for PgStreamTypeRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<StreamType>> {
        let results = sqlx::query_as::<_, StreamTypeModel>(
            r"
            SELECT id, name, created_at, updated_at
            FROM stream_types
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(StreamType::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<StreamType>> {
        let result = sqlx::query_as::<_, StreamTypeModel>(
            r"
            SELECT id, name, created_at, updated_at
            FROM stream_types
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(StreamType::from))
    }

    #[instrument(skip(self))]
    async fn name_exists(&self, name: &str, except_id: Option<i64>) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM stream_types
                WHERE name = $1 AND ($2::BIGINT IS NULL OR id <> $2)
            )
            ",
        )
        .bind(name)
        .bind(except_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn create(&self, name: &str) -> RepoResult<StreamType> {
        let result = sqlx::query_as::<_, StreamTypeModel>(
            r"
            INSERT INTO stream_types (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at
            ",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, name_taken))?;

        Ok(StreamType::from(result))
    }

    #[instrument(skip(self))]
    async fn update(&self, id: i64, name: &str) -> RepoResult<StreamType> {
        let result = sqlx::query_as::<_, StreamTypeModel>(
            r"
            UPDATE stream_types
            SET name = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, name_taken))?;

        result
            .map(StreamType::from)
            .ok_or_else(|| stream_type_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        // streams.stream_type_id is ON DELETE SET NULL
        let result = sqlx::query("DELETE FROM stream_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(stream_type_not_found(id));
        }

        Ok(())
    }
}
