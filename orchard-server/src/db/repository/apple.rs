//! Apple Repository

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{Apple, AppleCreate, AppleUpdate};
use serde::Serialize;
use shared::util::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

pub const TABLE: &str = "apple";

/// Stored form of a new apple
#[derive(Serialize)]
struct NewApple {
    #[serde(flatten)]
    data: AppleCreate,
    created_at: i64,
    updated_at: i64,
}

/// Merge patch for an update, stamping updated_at
#[derive(Serialize)]
struct ApplePatch {
    #[serde(flatten)]
    data: AppleUpdate,
    updated_at: i64,
}

#[derive(Clone)]
pub struct AppleRepository {
    base: BaseRepository,
}

impl AppleRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all apples ordered by name
    pub async fn find_all(&self) -> RepoResult<Vec<Apple>> {
        let apples: Vec<Apple> = self
            .base
            .db()
            .query("SELECT * FROM apple ORDER BY name")
            .await?
            .take(0)?;
        Ok(apples)
    }

    /// Find apple by id (`apple:key` or bare key)
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Apple>> {
        let apple: Option<Apple> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(apple)
    }

    /// Resolve the available apples among `ids`, in no particular order
    ///
    /// Unknown and unavailable ids are simply absent from the result.
    pub async fn find_available(&self, ids: &[String]) -> RepoResult<Vec<Apple>> {
        let mut found = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(apple) = self.find_by_id(id).await?
                && apple.available
            {
                found.push(apple);
            }
        }
        Ok(found)
    }

    /// Create a new apple
    pub async fn create(&self, data: AppleCreate) -> RepoResult<Apple> {
        let now = now_millis();
        let doc = NewApple {
            data,
            created_at: now,
            updated_at: now,
        };

        let created: Option<Apple> = self.base.db().create(TABLE).content(doc).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create apple".to_string()))
    }

    /// Partially update an apple
    pub async fn update(&self, id: &str, data: AppleUpdate) -> RepoResult<Apple> {
        let thing = record_id(TABLE, id);
        if self.find_by_id(id).await?.is_none() {
            return Err(RepoError::NotFound(format!("Apple {} not found", id)));
        }

        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", thing))
            .bind((
                "data",
                ApplePatch {
                    data,
                    updated_at: now_millis(),
                },
            ))
            .await?
            .check()?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Apple {} not found", id)))
    }

    /// Hard delete an apple, returning whether it existed
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let deleted: Option<Apple> = self.base.db().delete(record_id(TABLE, id)).await?;
        Ok(deleted.is_some())
    }

    /// Number of apples in the catalog
    pub async fn count(&self) -> RepoResult<usize> {
        self.base.count(TABLE).await
    }
}
