//! User entity - an account that can sign in and manage the catalogue

use chrono::{DateTime, Utc};

/// User entity. The password hash is never part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub email_verified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check whether `actor_id` refers to this account
    #[inline]
    pub fn is_same_account(&self, actor_id: i64) -> bool {
        self.id == actor_id
    }
}

/// Fields for inserting a user; the hash is passed separately
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

/// Full replacement of the profile fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
}
