//! Timestamp literal format shared by requests and responses.

use chrono::{DateTime, NaiveDateTime, Utc};

/// `YYYY-MM-DD HH:MM:SS`, no offset and no `T` separator.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExpirationError {
    #[error("expiration date is not in Y-m-d H:i:s format")]
    InvalidFormat,

    #[error("expiration date is not in the future")]
    NotInFuture,
}

/// Parse an expiration literal and check it is strictly after `now`.
pub fn parse_expiration(value: &str, now: NaiveDateTime) -> Result<NaiveDateTime, ExpirationError> {
    let parsed = NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map_err(|_| ExpirationError::InvalidFormat)?;

    // chrono tolerates unpadded and space-padded fields; only the canonical literal is accepted
    if parsed.format(TIMESTAMP_FORMAT).to_string() != value {
        return Err(ExpirationError::InvalidFormat);
    }

    if parsed <= now {
        return Err(ExpirationError::NotInFuture);
    }
    Ok(parsed)
}

/// Render a UTC timestamp in the response literal format.
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}
