//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Timestamps are rendered as `YYYY-MM-DD HH:MM:SS` strings.

use chrono::{DateTime, Utc};
use serde::Serialize;

use onestream_core::value_objects::Page;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Offset-paginated listing with navigation links
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub links: PaginationLinks,
    pub meta: PaginationMeta,
}

/// Links to neighbouring pages, `None` past either edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationLinks {
    pub first: String,
    pub last: String,
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    pub current_page: u32,
    /// 1-based position of the first item on this page
    pub from: Option<i64>,
    pub last_page: u32,
    pub path: String,
    pub per_page: u32,
    pub to: Option<i64>,
    pub total: i64,
}

impl<T> PaginatedResponse<T> {
    /// Wrap a page, building links relative to `path`
    pub fn from_page(page: Page<T>, path: &str) -> Self {
        let last_page = page.last_page();
        let per_page = page.per_page;
        let url = |n: u32| format!("{path}?page={n}&per_page={per_page}");

        let links = PaginationLinks {
            first: url(1),
            last: url(last_page),
            prev: (page.page > 1).then(|| url(page.page - 1)),
            next: (page.page < last_page).then(|| url(page.page + 1)),
        };
        let meta = PaginationMeta {
            current_page: page.page,
            from: page.from(),
            last_page,
            path: path.to_string(),
            per_page,
            to: page.to(),
            total: page.total,
        };

        Self {
            data: page.items,
            links,
            meta,
        }
    }
}

// ============================================================================
// Stream Responses
// ============================================================================

/// Stream with its type summarized
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamResponse {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub tokens_price: i64,
    #[serde(rename = "type")]
    pub stream_type: Option<StreamTypeSummary>,
    pub date_expiration: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Type as embedded in a stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamTypeSummary {
    pub id: i64,
    pub name: String,
}

// ============================================================================
// Stream Type Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreamTypeResponse {
    pub id: i64,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

// ============================================================================
// User Responses
// ============================================================================

/// User profile; the password hash is never part of it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub email_verified_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with an access token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(access_token: String, expires_in: i64, user: UserResponse) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
