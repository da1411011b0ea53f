use thiserror::Error;

/// Startup and serve failures
///
/// Request-level failures use [`crate::utils::AppError`]; this type only
/// covers the process lifecycle.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid bind address: {0}")]
    BindAddress(String),

    #[error("HTTP service not initialized")]
    NotInitialized,

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

/// Result alias for the server lifecycle
pub type Result<T> = std::result::Result<T, ServerError>;
