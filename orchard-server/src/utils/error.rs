//! Unified error handling
//!
//! Re-exports the error system from `shared::error` so handlers can import
//! everything from `crate::utils`.
//!
//! # Example
//!
//! ```ignore
//! use crate::utils::{AppError, AppResult, ErrorCode};
//!
//! async fn handler() -> AppResult<Json<Apple>> {
//!     Err(AppError::new(ErrorCode::AppleNotFound))
//! }
//! ```

pub use shared::error::{AppError, AppResult, ErrorBody, ErrorCategory, ErrorCode};
