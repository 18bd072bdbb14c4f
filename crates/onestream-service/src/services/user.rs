//! User service
//!
//! Handles user account management.

use onestream_common::hash_password;
use onestream_core::DomainError;
use tracing::{info, instrument, warn};

use crate::dto::{CreateUserRequest, UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const EMAIL_TAKEN_MESSAGE: &str = "The email has already been taken.";

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All users ordered by ID
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().find_all().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Get user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: i64) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(UserResponse::from(&user))
    }

    /// Create a user with a hashed password
    #[instrument(skip(self, request))]
    pub async fn create_user(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        let (new_user, password) = request.into_new_user()?;

        if self.ctx.user_repo().email_exists(&new_user.email, None).await? {
            return Err(ServiceError::field("email", EMAIL_TAKEN_MESSAGE));
        }

        let password_hash = hash_password(&password)?;
        let user = self.ctx.user_repo().create(&new_user, &password_hash).await?;
        info!(user_id = user.id, "User created");

        Ok(UserResponse::from(&user))
    }

    /// Replace name and email; re-hash the password only when a new one is given
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        user_id: i64,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        let repo = self.ctx.user_repo();

        if repo.find_by_id(user_id).await?.is_none() {
            return Err(ServiceError::not_found("User", user_id.to_string()));
        }

        let (update, password) = request.into_update()?;

        if repo.email_exists(&update.email, Some(user_id)).await? {
            return Err(ServiceError::field("email", EMAIL_TAKEN_MESSAGE));
        }

        let password_hash = password.as_deref().map(hash_password).transpose()?;
        let user = repo
            .update(user_id, &update, password_hash.as_deref())
            .await?;
        info!(user_id, password_changed = password_hash.is_some(), "User updated");

        Ok(UserResponse::from(&user))
    }

    /// Hard delete a user.
    ///
    /// `actor_id` is the authenticated caller, when known. An account can
    /// never delete itself; the row is left untouched in that case.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: i64, actor_id: Option<i64>) -> ServiceResult<()> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        if actor_id.is_some_and(|actor| user.is_same_account(actor)) {
            warn!(user_id, "Refused self-deletion");
            return Err(DomainError::CannotDeleteSelf.into());
        }

        self.ctx.user_repo().delete(user_id).await.map_err(|e| {
            if e.is_not_found() {
                ServiceError::not_found("User", user_id.to_string())
            } else {
                e.into()
            }
        })?;
        info!(user_id, "User deleted");

        Ok(())
    }
}
