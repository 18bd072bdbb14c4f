//! Authentication service
//!
//! Exchanges credentials for a bearer access token and resolves the current user.

use onestream_common::{verify_password, AppError};
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, LoginRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        // Find user by email
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Get password hash
        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Verify password
        let is_valid = verify_password(&request.password, &password_hash)?;
        if !is_valid {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let token = self.ctx.jwt_service().generate_access_token(user.id)?;
        info!(user_id = user.id, "User logged in successfully");

        Ok(AuthResponse::new(
            token.access_token,
            token.expires_in,
            UserResponse::from(&user),
        ))
    }

    /// Resolve the user a valid token was issued to
    #[instrument(skip(self))]
    pub async fn current_user(&self, user_id: i64) -> ServiceResult<UserResponse> {
        // A token outliving its account is no longer a valid identity
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        Ok(UserResponse::from(&user))
    }
}
