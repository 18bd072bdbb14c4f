//! User handlers
//!
//! Account management. Deletion consults the caller's identity when a
//! bearer token is supplied.

use axum::{extract::State, Json};
use onestream_service::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};
use onestream_service::UserService;

use crate::extractors::{IdPath, JsonBody, OptionalAuthUser};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List users
///
/// GET /users
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.list_users().await?))
}

/// Create a user
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let user = service.create_user(request).await?;
    Ok(Created(Json(user)))
}

/// Get a user
///
/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.get_user(user_id).await?))
}

/// Update a user
///
/// PUT/PATCH /users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
    JsonBody(request): JsonBody<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.update_user(user_id, request).await?))
}

/// Delete a user
///
/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    IdPath(user_id): IdPath,
    OptionalAuthUser(actor): OptionalAuthUser,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service
        .delete_user(user_id, actor.map(|a| a.user_id))
        .await?;
    Ok(NoContent)
}
