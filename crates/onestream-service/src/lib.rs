//! # onestream-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, FieldErrors, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    StreamService, StreamTypeService, UserService,
};
