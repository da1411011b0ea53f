//! Database Module
//!
//! SurrealDB connection, schema and first-run seed data.
//!
//! The endpoint comes from `DATABASE_URL` and is opened through the `any`
//! engine, so the same code serves `mem://` (tests), `rocksdb://` (single
//! node) and `ws://` (remote server).

pub mod models;
pub mod repository;

use std::fmt;
use std::path::Path;

use rust_decimal::Decimal;
use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use surrealdb::opt::auth::Root;

use crate::core::Config;
use crate::db::models::AppleCreate;
use crate::db::repository::AppleRepository;
use crate::utils::AppError;

/// Tables and the indexes created at startup
const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS apple SCHEMALESS;
DEFINE INDEX IF NOT EXISTS apple_name ON TABLE apple FIELDS name;
DEFINE INDEX IF NOT EXISTS apple_available ON TABLE apple FIELDS available;

DEFINE TABLE IF NOT EXISTS orders SCHEMALESS;
DEFINE INDEX IF NOT EXISTS orders_customer_email ON TABLE orders FIELDS customer_email;
DEFINE INDEX IF NOT EXISTS orders_status ON TABLE orders FIELDS status;
DEFINE INDEX IF NOT EXISTS orders_created_at ON TABLE orders FIELDS created_at;
DEFINE INDEX IF NOT EXISTS orders_pickup_date ON TABLE orders FIELDS pickup_date;

DEFINE TABLE IF NOT EXISTS contact_message SCHEMALESS;
DEFINE INDEX IF NOT EXISTS contact_message_email ON TABLE contact_message FIELDS email;
DEFINE INDEX IF NOT EXISTS contact_message_created_at ON TABLE contact_message FIELDS created_at;

DEFINE TABLE IF NOT EXISTS site_content SCHEMALESS;
DEFINE INDEX IF NOT EXISTS site_content_section ON TABLE site_content FIELDS section UNIQUE;
"#;

/// Stock kept per variety when seeding
const SEED_MAX_QUANTITY_KG: u32 = 250;

/// Database service - owns the SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Any>,
}

impl fmt::Debug for DbService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbService").finish_non_exhaustive()
    }
}

impl DbService {
    /// Connect, select namespace/database, define the schema and seed
    ///
    /// Gives up after `DATABASE_CONNECT_TIMEOUT_MS`.
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        ensure_local_dir(&config.database_url)?;

        let connect = any::connect(config.database_url.as_str());
        let db = tokio::time::timeout(config.connect_timeout(), connect)
            .await
            .map_err(|_| {
                AppError::database_unavailable().with_detail("reason", "connect timed out")
            })?
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        if let (Some(username), Some(password)) =
            (&config.database_user, &config.database_password)
        {
            db.signin(Root {
                username,
                password,
            })
            .await
            .map_err(|e| AppError::database(format!("Database sign-in failed: {e}")))?;
        }

        db.use_ns(&config.database_namespace)
            .use_db(&config.database_name)
            .await
            .map_err(|e| AppError::database(format!("Failed to select database: {e}")))?;

        let service = Self { db };
        service.define_schema().await?;
        service.seed().await?;

        tracing::info!(
            url = %config.database_url,
            namespace = %config.database_namespace,
            database = %config.database_name,
            "Database connection established"
        );

        Ok(service)
    }

    async fn define_schema(&self) -> Result<(), AppError> {
        self.db
            .query(SCHEMA)
            .await
            .and_then(|response| response.check())
            .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;
        tracing::debug!("Database schema defined");
        Ok(())
    }

    /// Insert the default varieties into an empty catalog
    async fn seed(&self) -> Result<(), AppError> {
        let apples = AppleRepository::new(self.db.clone());
        if apples.count().await? > 0 {
            return Ok(());
        }

        for apple in seed_apples() {
            let name = apple.name.clone();
            apples.create(apple).await?;
            tracing::info!(apple = %name, "Seeded apple variety");
        }

        Ok(())
    }
}

/// Varieties inserted on first start
pub fn seed_apples() -> Vec<AppleCreate> {
    [
        ("Gala", "Słodkie i socziste", Decimal::new(450, 2)),
        ("Jonagold", "Mieszanka słodkości i kwaskości", Decimal::new(500, 2)),
        ("Fuji", "Słodkie z nutą kardamonu", Decimal::new(550, 2)),
    ]
    .into_iter()
    .map(|(name, description, price)| AppleCreate {
        name: name.to_string(),
        description: description.to_string(),
        price,
        available: true,
        photo_url: None,
        max_quantity_kg: Some(SEED_MAX_QUANTITY_KG),
    })
    .collect()
}

/// RocksDB needs its parent directory to exist
fn ensure_local_dir(url: &str) -> Result<(), AppError> {
    let Some(path) = url.strip_prefix("rocksdb://") else {
        return Ok(());
    };

    if let Some(parent) = Path::new(path).parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::database(format!("Failed to create database directory: {e}"))
        })?;
    }

    Ok(())
}
