use std::time::Instant;

use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use crate::core::Config;
use crate::db::DbService;
use crate::services::HttpsService;
use crate::utils::{AppError, AppResult};

/// Server state - shared handles for every request
///
/// Cloning is cheap: the database handle and the router cache are reference
/// counted.
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | immutable configuration |
/// | db | Option<DbService> | database, `None` in development mode |
/// | https | HttpsService | cached router |
/// | started_at | Instant | process start, for uptime |
///
/// When the database cannot be reached at startup the server still comes up
/// in **development mode**: read endpoints serve built-in fallbacks and
/// mutations report the database as unavailable.
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: Option<DbService>,
    pub https: HttpsService,
    pub started_at: Instant,
}

impl ServerState {
    /// Build state from parts
    ///
    /// Usually [`initialize()`](Self::initialize) is used instead.
    pub fn new(config: Config, db: Option<DbService>, https: HttpsService) -> Self {
        Self {
            config,
            db,
            https,
            started_at: Instant::now(),
        }
    }

    /// Initialize server state
    ///
    /// In order:
    /// 1. upload directory
    /// 2. database (falls back to development mode on failure)
    /// 3. HTTP router, which needs the finished state
    pub async fn initialize(config: &Config) -> Self {
        if let Err(e) = tokio::fs::create_dir_all(config.upload_path()).await {
            tracing::warn!(
                upload_dir = %config.upload_dir,
                error = %e,
                "Failed to create upload directory"
            );
        }

        let db = match DbService::connect(config).await {
            Ok(service) => Some(service),
            Err(e) => {
                tracing::warn!(
                    database_url = %config.database_url,
                    error = %e,
                    "Database unavailable, running in development mode"
                );
                None
            }
        };

        Self::with_db(config, db)
    }

    /// Initialize with an already opened (or deliberately absent) database
    pub fn with_db(config: &Config, db: Option<DbService>) -> Self {
        let https = HttpsService::new(config.clone());
        let state = Self::new(config.clone(), db, https.clone());

        // Late initialization for HttpsService (needs state)
        https.initialize(state.clone());

        state
    }

    /// Database handle, or `None` in development mode
    pub fn database(&self) -> Option<&Surreal<Any>> {
        self.db.as_ref().map(|service| &service.db)
    }

    /// Database handle for mutations, which have no development fallback
    pub fn require_db(&self) -> AppResult<&Surreal<Any>> {
        self.database().ok_or_else(AppError::database_unavailable)
    }

    pub fn is_development_mode(&self) -> bool {
        self.db.is_none()
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
