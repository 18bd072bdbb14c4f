//! Stream listing SQL
//!
//! Builds the page and count statements for a canonical [`StreamQuery`].
//! Sort columns come from [`SortField`](onestream_core::SortField) only; all
//! caller values are bound parameters.

use sqlx::{Postgres, QueryBuilder};

use onestream_core::value_objects::StreamQuery;

/// Stream columns plus the joined type, as read by `StreamModel`
pub(crate) const STREAM_COLUMNS: &str = "s.id, s.title, s.description, s.tokens_price, \
     s.stream_type_id, s.date_expiration, s.created_at, s.updated_at, s.deleted_at, \
     t.name AS type_name, t.created_at AS type_created_at, t.updated_at AS type_updated_at";

/// `SELECT` of stream rows from `source` (aliased or named `s`) with the type joined
pub(crate) fn joined_select(source: &str) -> String {
    format!("SELECT {STREAM_COLUMNS} FROM {source} LEFT JOIN stream_types t ON t.id = s.stream_type_id")
}

/// Escape LIKE metacharacters so the term matches literally
pub(crate) fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Builds the statements for one stream listing page
#[derive(Debug, Clone, Copy)]
pub struct StreamQueryBuilder<'q> {
    query: &'q StreamQuery,
}

impl<'q> StreamQueryBuilder<'q> {
    pub fn new(query: &'q StreamQuery) -> Self {
        Self { query }
    }

    /// Rows of the requested page, ordered, with a stable tiebreaker
    pub fn select(&self) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new(joined_select("streams s"));
        self.push_filters(&mut qb);

        let sort = self.query.sort;
        qb.push(" ORDER BY s.")
            .push(sort.field.column())
            .push(" ")
            .push(sort.direction.as_sql())
            .push(", s.id ASC");

        qb.push(" LIMIT ")
            .push_bind(self.query.limit())
            .push(" OFFSET ")
            .push_bind(self.query.offset());
        qb
    }

    /// Total rows matching the same filters
    pub fn count(&self) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM streams s");
        self.push_filters(&mut qb);
        qb
    }

    fn push_filters(&self, qb: &mut QueryBuilder<'static, Postgres>) {
        qb.push(" WHERE s.deleted_at IS NULL");

        if let Some(term) = self.query.search.as_deref().filter(|t| !t.is_empty()) {
            let pattern = format!("%{}%", escape_like(term));
            qb.push(" AND (s.title ILIKE ")
                .push_bind(pattern.clone())
                .push(" OR s.description ILIKE ")
                .push_bind(pattern)
                .push(")");
        }

        if let Some(stream_type_id) = self.query.stream_type_id {
            qb.push(" AND s.stream_type_id = ").push_bind(stream_type_id);
        }
    }
}
