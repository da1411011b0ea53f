//! Utilities - logging, validation and shared request types
//!
//! # Contents
//!
//! - [`AppError`] - application error (from shared::error)
//! - [`ErrorBody`] - JSON error body (from shared::error)
//! - [`logger`] - tracing setup
//! - [`validation`] - request payload validation
//! - [`types`] - query parameter types

pub mod error;
pub mod logger;
pub mod types;
pub mod validation;

pub use error::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};
