//! Srebrna Sad orchard storefront backend
//!
//! # Overview
//!
//! - **Pricing** (`pricing`): order builder and delivery eligibility
//! - **Database** (`db`): SurrealDB models, repositories, schema and seed
//! - **HTTP API** (`api`): storefront and admin endpoints
//!
//! # Layout
//!
//! ```text
//! orchard-server/src/
//! ├── core/          # config, state, server lifecycle, errors
//! ├── services/      # router cache and HTTP listener
//! ├── middleware/    # request logging
//! ├── api/           # routes and handlers
//! ├── pricing/       # order pricing and delivery rules
//! ├── db/            # SurrealDB layer
//! └── utils/         # logging, validation, paging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod pricing;
pub mod services;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use pricing::{CatalogSnapshot, PriceLookup, build_order, check_delivery};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ErrorBody, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// Load `.env` and start logging
///
/// Logging settings come from `LOG_LEVEL`, `LOG_JSON` and `LOG_DIR`.
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
  🍎  Srebrna Sad  🍎
  orchard storefront server v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
