//! Contact Message Repository

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::ContactMessage;
use crate::db::models::contact::STATUS_UNREAD;
use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

pub const TABLE: &str = "contact_message";

#[derive(Serialize)]
struct NewContactMessage {
    name: String,
    email: String,
    phone: Option<String>,
    message: String,
    status: &'static str,
    created_at: i64,
}

#[derive(Clone)]
pub struct ContactRepository {
    base: BaseRepository,
}

impl ContactRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Store a new message as unread
    pub async fn create(
        &self,
        name: String,
        email: String,
        phone: Option<String>,
        message: String,
        created_at: i64,
    ) -> RepoResult<ContactMessage> {
        let doc = NewContactMessage {
            name,
            email,
            phone,
            message,
            status: STATUS_UNREAD,
            created_at,
        };

        let created: Option<ContactMessage> = self.base.db().create(TABLE).content(doc).await?;
        created.ok_or_else(|| RepoError::Database("Failed to save message".to_string()))
    }

    /// All messages, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<ContactMessage>> {
        let messages: Vec<ContactMessage> = self
            .base
            .db()
            .query("SELECT * FROM contact_message ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(messages)
    }

    /// Find message by id (`contact_message:key` or bare key)
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<ContactMessage>> {
        let message: Option<ContactMessage> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(message)
    }
}
