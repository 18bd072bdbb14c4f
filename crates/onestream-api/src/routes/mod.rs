//! Route definitions
//!
//! Resource routes are mounted under /api; health probes sit at the root.

use axum::{routing::get, routing::post, Router};

use crate::handlers::{auth, health, stream_types, streams, users};
use crate::state::AppState;

/// Create the API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(stream_routes())
        .merge(stream_type_routes())
        .merge(user_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
}

/// Stream routes
fn stream_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/streams",
            get(streams::list_streams).post(streams::create_stream),
        )
        .route(
            "/streams/:id",
            get(streams::get_stream)
                .put(streams::update_stream)
                .patch(streams::update_stream)
                .delete(streams::delete_stream),
        )
}

/// Stream type routes
fn stream_type_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/stream-types",
            get(stream_types::list_stream_types).post(stream_types::create_stream_type),
        )
        .route(
            "/stream-types/:id",
            get(stream_types::get_stream_type)
                .put(stream_types::update_stream_type)
                .patch(stream_types::update_stream_type)
                .delete(stream_types::delete_stream_type),
        )
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:id",
            get(users::get_user)
                .put(users::update_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
}
