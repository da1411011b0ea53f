//! Repository Module
//!
//! CRUD operations over the SurrealDB tables.

pub mod apple;
pub mod contact;
pub mod content;
pub mod order;

pub use apple::AppleRepository;
pub use contact::ContactRepository;
pub use content::ContentRepository;
pub use order::OrderRepository;

use serde::Deserialize;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use thiserror::Error;

use crate::utils::{AppError, ErrorCode};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Database(msg) => {
                tracing::error!(error = %msg, "Repository failure");
                AppError::database(msg)
            }
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: ids travel as "table:key" strings
// =============================================================================
//
// surrealdb::RecordId is used internally:
//   - from the API: record_id("apple", "apple:abc") or record_id("apple", "abc")
//   - to the API: id.to_string() via serde_helpers::option_record_id
//   - CRUD: db.select(id) / db.delete(id) take the RecordId directly

/// Key part of `table:key`, `table:⟨key⟩` or a bare `key`
pub fn record_key<'a>(table: &str, id: &'a str) -> &'a str {
    let key = id
        .strip_prefix(table)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(id);
    key.strip_prefix('⟨')
        .and_then(|k| k.strip_suffix('⟩'))
        .unwrap_or(key)
}

/// Build a RecordId for `table` from either `table:key` or a bare `key`
pub fn record_id(table: &str, id: &str) -> RecordId {
    RecordId::from_table_key(table, record_key(table, id))
}

/// Row shape of `SELECT count() ... GROUP ALL`
#[derive(Debug, Deserialize)]
pub(crate) struct CountRow {
    pub count: usize,
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Any>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Any> {
        &self.db
    }

    /// Number of records in `table`
    pub async fn count(&self, table: &str) -> RepoResult<usize> {
        let row: Option<CountRow> = self
            .db
            .query("SELECT count() FROM type::table($table) GROUP ALL")
            .bind(("table", table.to_string()))
            .await?
            .take(0)?;
        Ok(row.map(|r| r.count).unwrap_or(0))
    }
}
