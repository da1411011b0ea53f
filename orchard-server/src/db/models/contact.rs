//! Contact Message Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use crate::utils::validation::{MAX_MESSAGE_LEN, MAX_NAME_LEN, MAX_PHONE_LEN};

/// Status stored on new messages
pub const STATUS_UNREAD: &str = "unread";

/// Status reported back to the sender
pub const STATUS_RECEIVED: &str = "received";

/// Contact message as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
    pub status: String,
    /// Unix millis
    pub created_at: i64,
}

impl ContactMessage {
    pub fn id_string(&self) -> String {
        self.id.as_ref().map(|id| id.to_string()).unwrap_or_default()
    }
}

/// Contact form payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactMessageCreate {
    #[validate(length(min = 1, max = MAX_NAME_LEN))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = MAX_PHONE_LEN))]
    pub phone: Option<String>,
    #[validate(length(min = 1, max = MAX_MESSAGE_LEN))]
    pub message: String,
}

/// Acknowledgement returned to the sender
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessageReceipt {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub created_at: i64,
    pub status: String,
}

impl ContactMessageReceipt {
    /// Receipt for a stored message, with `id` as given
    pub fn new(id: impl Into<String>, message: ContactMessage) -> Self {
        Self {
            id: id.into(),
            name: message.name,
            email: message.email,
            phone: message.phone,
            message: message.message,
            created_at: message.created_at,
            status: STATUS_RECEIVED.to_string(),
        }
    }
}

/// Messages listing response
#[derive(Debug, Clone, Serialize)]
pub struct ContactMessageList {
    pub messages: Vec<ContactMessage>,
    pub total: usize,
    pub skip: u32,
    pub limit: u32,
}
