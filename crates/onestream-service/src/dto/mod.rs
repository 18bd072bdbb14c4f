//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Query-string normalization for stream listings
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod query;
pub mod requests;
pub mod responses;

pub use query::normalize_stream_query;

pub use requests::{
    CreateStreamRequest, CreateUserRequest, LoginRequest, StreamTypeRequest, UpdateStreamRequest,
    UpdateUserRequest,
};

pub use responses::{
    ApiResponse, AuthResponse, HealthChecks, HealthResponse, PaginatedResponse, PaginationLinks,
    PaginationMeta, ReadinessResponse, StreamResponse, StreamTypeResponse, StreamTypeSummary,
    UserResponse,
};
