//! Shared types for the orchard storefront
//!
//! Types used by the server and by anything that talks to it: the unified
//! error system, the order pricing value types and small utilities.

pub mod error;
pub mod order;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
