//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate`; the derive
//! attributes are the only place input rules live. Required fields are
//! `Option`s so a missing field is reported per field instead of failing
//! deserialization.

use std::borrow::Cow;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

use onestream_core::entities::{NewStream, NewUser, StreamPatch, UserUpdate};
use onestream_core::value_objects::{parse_expiration, ExpirationError};

use crate::services::error::{ServiceError, ServiceResult};

const DATE_FORMAT_MESSAGE: &str = "The date expiration field must match the format Y-m-d H:i:s.";
const DATE_AFTER_NOW_MESSAGE: &str = "The date expiration field must be a date after now.";

/// Distinguishes an explicit `null` (`Some(None)`) from an absent field (`None`)
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn expiration_error(err: ExpirationError) -> ValidationError {
    let (code, message) = match err {
        ExpirationError::InvalidFormat => ("date_format", DATE_FORMAT_MESSAGE),
        ExpirationError::NotInFuture => ("after", DATE_AFTER_NOW_MESSAGE),
    };
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn validate_date_expiration(value: &str) -> Result<(), ValidationError> {
    parse_expiration(value, chrono::Utc::now().naive_utc())
        .map(|_| ())
        .map_err(expiration_error)
}

/// Empty means "keep the current password"
fn validate_optional_password(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || value.chars().count() >= 8 {
        Ok(())
    } else {
        Err(ValidationError::new("length")
            .with_message(Cow::Borrowed("The password field must be at least 8 characters.")))
    }
}

/// Timestamp for an already validated literal, re-checked against the write time
fn expiration_at(value: &str, now: NaiveDateTime) -> ServiceResult<NaiveDateTime> {
    parse_expiration(value, now).map_err(|e| {
        let message = expiration_error(e).message.unwrap_or_default();
        ServiceError::field("date_expiration", message)
    })
}

fn missing(fields: &str) -> ServiceError {
    ServiceError::internal(format!("validated {fields} fields missing"))
}

// ============================================================================
// Stream Requests
// ============================================================================

/// Create stream request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateStreamRequest {
    #[validate(
        required(message = "The title field is required."),
        length(min = 1, max = 255, message = "The title field must be between 1 and 255 characters.")
    )]
    pub title: Option<String>,

    #[validate(length(max = 655, message = "The description field must not be greater than 655 characters."))]
    pub description: Option<String>,

    #[validate(
        required(message = "The tokens price field is required."),
        range(min = 1, message = "The tokens price field must be at least 1.")
    )]
    pub tokens_price: Option<i64>,

    /// Must reference an existing stream type
    pub stream_type_id: Option<i64>,

    /// `YYYY-MM-DD HH:MM:SS`, strictly in the future
    #[validate(
        required(message = "The date expiration field is required."),
        custom(function = "validate_date_expiration")
    )]
    pub date_expiration: Option<String>,
}

impl CreateStreamRequest {
    /// Validate the request and build the insert
    pub fn into_new_stream(self, now: NaiveDateTime) -> ServiceResult<NewStream> {
        self.validate()?;

        let (Some(title), Some(tokens_price), Some(date_expiration)) =
            (self.title, self.tokens_price, self.date_expiration)
        else {
            return Err(missing("stream"));
        };

        Ok(NewStream::new(
            title,
            self.description,
            tokens_price,
            self.stream_type_id,
            expiration_at(&date_expiration, now)?,
        ))
    }
}

/// Update stream request
///
/// Absent fields are left untouched. `description` and `stream_type_id`
/// accept an explicit `null` to clear them.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStreamRequest {
    #[validate(length(min = 1, max = 255, message = "The title field must be between 1 and 255 characters."))]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    #[validate(length(max = 655, message = "The description field must not be greater than 655 characters."))]
    pub description: Option<Option<String>>,

    #[validate(range(min = 1, message = "The tokens price field must be at least 1."))]
    pub tokens_price: Option<i64>,

    #[serde(default, deserialize_with = "double_option")]
    pub stream_type_id: Option<Option<i64>>,

    #[validate(custom(function = "validate_date_expiration"))]
    pub date_expiration: Option<String>,
}

impl UpdateStreamRequest {
    /// Validate the request and build the patch
    pub fn into_patch(self, now: NaiveDateTime) -> ServiceResult<StreamPatch> {
        self.validate()?;

        let date_expiration = self
            .date_expiration
            .as_deref()
            .map(|value| expiration_at(value, now))
            .transpose()?;

        Ok(StreamPatch {
            title: self.title,
            description: self.description,
            tokens_price: self.tokens_price,
            stream_type_id: self.stream_type_id,
            date_expiration,
        })
    }

    /// Type referenced by the patch, if it sets one
    pub fn referenced_stream_type(&self) -> Option<i64> {
        self.stream_type_id.flatten()
    }
}

// ============================================================================
// Stream Type Requests
// ============================================================================

/// Create or rename a stream type
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct StreamTypeRequest {
    #[validate(
        required(message = "The name field is required."),
        length(min = 1, max = 255, message = "The name field must be between 1 and 255 characters.")
    )]
    pub name: Option<String>,
}

impl StreamTypeRequest {
    pub fn into_name(self) -> ServiceResult<String> {
        self.validate()?;
        self.name.ok_or_else(|| missing("stream type"))
    }
}

// ============================================================================
// User Requests
// ============================================================================

/// Create user request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(
        required(message = "The name field is required."),
        length(min = 1, max = 255, message = "The name field must be between 1 and 255 characters.")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "The email field is required."),
        email(message = "The email field must be a valid email address."),
        length(max = 255, message = "The email field must not be greater than 255 characters.")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "The password field is required."),
        length(min = 8, message = "The password field must be at least 8 characters.")
    )]
    pub password: Option<String>,
}

/// Update user request
///
/// An absent or empty `password` keeps the stored hash.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(
        required(message = "The name field is required."),
        length(min = 1, max = 255, message = "The name field must be between 1 and 255 characters.")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "The email field is required."),
        email(message = "The email field must be a valid email address."),
        length(max = 255, message = "The email field must not be greater than 255 characters.")
    )]
    pub email: Option<String>,

    #[validate(custom(function = "validate_optional_password"))]
    pub password: Option<String>,
}

impl CreateUserRequest {
    /// Validate the request; returns the profile and the plain password
    pub fn into_new_user(self) -> ServiceResult<(NewUser, String)> {
        self.validate()?;

        let (Some(name), Some(email), Some(password)) = (self.name, self.email, self.password)
        else {
            return Err(missing("user"));
        };
        Ok((NewUser { name, email }, password))
    }
}

impl UpdateUserRequest {
    /// Validate the request; the password is `None` when it should stay as it is
    pub fn into_update(self) -> ServiceResult<(UserUpdate, Option<String>)> {
        self.validate()?;

        let (Some(name), Some(email)) = (self.name, self.email) else {
            return Err(missing("user"));
        };
        let password = self.password.filter(|p| !p.is_empty());
        Ok((UserUpdate { name, email }, password))
    }
}

// ============================================================================
// Auth Requests
// ============================================================================

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "The email field must be a valid email address."))]
    pub email: String,

    #[validate(length(min = 1, message = "The password field is required."))]
    pub password: String,
}
