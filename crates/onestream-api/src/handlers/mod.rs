//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod auth;
pub mod health;
pub mod stream_types;
pub mod streams;
pub mod users;
