use std::path::PathBuf;
use std::time::Duration;

/// Storefront origins allowed by CORS when `ALLOWED_ORIGINS` is unset
const DEFAULT_ALLOWED_ORIGINS: &str =
    "http://localhost:5173,http://localhost:3000,https://pinchr.github.io";

/// Server configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment (a `.env` file is
/// loaded first):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_HOST | 0.0.0.0 | bind address |
/// | HTTP_PORT | 8000 | HTTP port |
/// | DATABASE_URL | rocksdb://data/orchard.db | SurrealDB endpoint (mem://, rocksdb://, ws://) |
/// | DATABASE_NAMESPACE | orchard | SurrealDB namespace |
/// | DATABASE_NAME | srebrnasad | SurrealDB database |
/// | DATABASE_USER / DATABASE_PASSWORD | unset | root credentials for remote servers |
/// | DATABASE_CONNECT_TIMEOUT_MS | 5000 | connect timeout |
/// | UPLOAD_DIR | uploads | upload directory |
/// | ALLOWED_ORIGINS | storefront origins | comma separated CORS allow-list |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | log level |
/// | LOG_JSON | false | JSON log lines |
/// | LOG_DIR | unset | daily rotating log directory |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | graceful shutdown grace period |
///
/// # Example
///
/// ```ignore
/// DATABASE_URL=mem:// HTTP_PORT=8080 cargo run -p orchard-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind address
    pub http_host: String,
    /// HTTP API port
    pub http_port: u16,
    /// SurrealDB endpoint
    pub database_url: String,
    pub database_namespace: String,
    pub database_name: String,
    /// Root credentials, only used when both are set
    pub database_user: Option<String>,
    pub database_password: Option<String>,
    /// How long to wait for the database before starting in development mode
    pub database_connect_timeout_ms: u64,
    /// Where uploaded images are written
    pub upload_dir: String,
    /// CORS allow-list
    pub allowed_origins: Vec<String>,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// Grace period for in-flight requests on shutdown
    pub shutdown_timeout_ms: u64,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Split a comma separated origin list, dropping blanks
pub fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

impl Config {
    /// Load configuration from the environment
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            http_host: env_or("HTTP_HOST", "0.0.0.0"),
            http_port: env_parse("HTTP_PORT", 8000),
            database_url: env_or("DATABASE_URL", "rocksdb://data/orchard.db"),
            database_namespace: env_or("DATABASE_NAMESPACE", "orchard"),
            database_name: env_or("DATABASE_NAME", "srebrnasad"),
            database_user: env_opt("DATABASE_USER"),
            database_password: env_opt("DATABASE_PASSWORD"),
            database_connect_timeout_ms: env_parse("DATABASE_CONNECT_TIMEOUT_MS", 5000),
            upload_dir: env_or("UPLOAD_DIR", "uploads"),
            allowed_origins: parse_origins(&env_or("ALLOWED_ORIGINS", DEFAULT_ALLOWED_ORIGINS)),
            environment: env_or("ENVIRONMENT", "development"),
            log_level: env_or("LOG_LEVEL", "info"),
            log_json: env_parse("LOG_JSON", false),
            log_dir: env_opt("LOG_DIR"),
            shutdown_timeout_ms: env_parse("SHUTDOWN_TIMEOUT_MS", 10000),
        }
    }

    /// Override the pieces tests care about
    ///
    /// Typically `mem://` plus a temporary upload directory.
    pub fn with_overrides(database_url: impl Into<String>, upload_dir: impl Into<String>) -> Self {
        let mut config = Self::from_env();
        config.database_url = database_url.into();
        config.upload_dir = upload_dir.into();
        config
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    pub fn upload_path(&self) -> PathBuf {
        PathBuf::from(&self.upload_dir)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.database_connect_timeout_ms)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.shutdown_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
