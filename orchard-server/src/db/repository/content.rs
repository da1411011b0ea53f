//! Site Content Repository (Singletons)
//!
//! One record per section, keyed by the section name:
//! `site_content:hero`, `site_content:about`, `site_content:gallery`.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{ContentSection, SiteContent};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::util::now_millis;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

pub const TABLE: &str = "site_content";

#[derive(Clone)]
pub struct ContentRepository {
    base: BaseRepository,
}

impl ContentRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn thing(section: ContentSection) -> RecordId {
        RecordId::from_table_key(TABLE, section.as_str())
    }

    /// Stored content for a section, `None` if never saved
    pub async fn get<T>(&self, section: ContentSection) -> RepoResult<Option<T>>
    where
        T: DeserializeOwned,
    {
        let record: Option<SiteContent<T>> = self.base.db().select(Self::thing(section)).await?;
        Ok(record.map(|r| r.content))
    }

    /// Create or replace a section
    pub async fn upsert<T>(&self, section: ContentSection, content: T) -> RepoResult<T>
    where
        T: Serialize + DeserializeOwned + 'static,
    {
        let record = SiteContent {
            section,
            content,
            updated_at: now_millis(),
        };

        let saved: Option<SiteContent<T>> = self
            .base
            .db()
            .upsert(Self::thing(section))
            .content(record)
            .await?;

        saved
            .map(|r| r.content)
            .ok_or_else(|| RepoError::Database(format!("Failed to save {} content", section)))
    }
}
