//! Authentication handlers

use axum::{extract::State, Json};
use onestream_service::dto::{AuthResponse, LoginRequest, UserResponse};
use onestream_service::AuthService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Login with email and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Get the authenticated user
///
/// GET /auth/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<UserResponse>> {
    let service = AuthService::new(state.service_context());
    let user = service.current_user(auth.user_id).await?;
    Ok(Json(user))
}
