//! PostgreSQL implementation of StreamRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::instrument;

use onestream_core::entities::{NewStream, Stream, StreamPatch};
use onestream_core::traits::{RepoResult, StreamRepository};
use onestream_core::value_objects::{Page, StreamId, StreamQuery};

use crate::models::StreamModel;

use super::error::{map_db_error, map_foreign_key_violation, stream_not_found, unknown_stream_type};
use super::query::{joined_select, StreamQueryBuilder};

/// PostgreSQL implementation of StreamRepository
#[derive(Clone)]
pub struct PgStreamRepository {
    pool: PgPool,
}

impl PgStreamRepository {
    /// Create a new PgStreamRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Single-statement partial update returning the joined row
fn build_update(id: StreamId, patch: &StreamPatch) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new("WITH s AS (UPDATE streams SET ");
    {
        let mut set = qb.separated(", ");
        if let Some(title) = &patch.title {
            set.push("title = ").push_bind_unseparated(title.clone());
        }
        if let Some(description) = &patch.description {
            set.push("description = ")
                .push_bind_unseparated(description.clone());
        }
        if let Some(tokens_price) = patch.tokens_price {
            set.push("tokens_price = ").push_bind_unseparated(tokens_price);
        }
        if let Some(stream_type_id) = patch.stream_type_id {
            set.push("stream_type_id = ")
                .push_bind_unseparated(stream_type_id);
        }
        if let Some(date_expiration) = patch.date_expiration {
            set.push("date_expiration = ")
                .push_bind_unseparated(date_expiration);
        }
        set.push("updated_at = NOW()");
    }
    qb.push(" WHERE id = ")
        .push_bind(id.into_inner())
        .push(" AND deleted_at IS NULL RETURNING *) ")
        .push(joined_select("s"));
    qb
}

#[async_trait]
impl StreamRepository for PgStreamRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: StreamId) -> RepoResult<Option<Stream>> {
        let sql = format!(
            "{} WHERE s.id = $1 AND s.deleted_at IS NULL",
            joined_select("streams s")
        );
        let result = sqlx::query_as::<_, StreamModel>(&sql)
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.map(Stream::from))
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &StreamQuery) -> RepoResult<Page<Stream>> {
        let builder = StreamQueryBuilder::new(query);

        let total = builder
            .count()
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let rows = builder
            .select()
            .build_query_as::<StreamModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Page::new(
            rows.into_iter().map(Stream::from).collect(),
            total,
            query.page,
            query.per_page,
        ))
    }

    #[instrument(skip(self, stream), fields(stream_id = %stream.id))]
    async fn create(&self, stream: &NewStream) -> RepoResult<Stream> {
        let sql = format!(
            "WITH s AS ( \
                INSERT INTO streams (id, title, description, tokens_price, stream_type_id, date_expiration) \
                VALUES ($1, $2, $3, $4, $5, $6) \
                RETURNING * \
             ) {}",
            joined_select("s")
        );
        let row = sqlx::query_as::<_, StreamModel>(&sql)
            .bind(stream.id.into_inner())
            .bind(&stream.title)
            .bind(&stream.description)
            .bind(stream.tokens_price)
            .bind(stream.stream_type_id)
            .bind(stream.date_expiration)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_foreign_key_violation(e, unknown_stream_type))?;

        Ok(Stream::from(row))
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: StreamId, patch: &StreamPatch) -> RepoResult<Stream> {
        let row = build_update(id, patch)
            .build_query_as::<StreamModel>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_foreign_key_violation(e, unknown_stream_type))?;

        row.map(Stream::from).ok_or_else(|| stream_not_found(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: StreamId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE streams
            SET deleted_at = NOW()
            WHERE id = $1 AND deleted_at IS NULL
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(stream_not_found(id));
        }

        Ok(())
    }
}
