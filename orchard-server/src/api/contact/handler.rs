//! Contact API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use shared::util::now_millis;

use crate::core::ServerState;
use crate::db::models::contact::STATUS_UNREAD;
use crate::db::models::{
    ContactMessage, ContactMessageCreate, ContactMessageList, ContactMessageReceipt,
};
use crate::db::repository::ContactRepository;
use crate::utils::types::SkipLimitParams;
use crate::utils::validation::validate_payload;
use crate::utils::{AppError, AppResult, ErrorCode};

const DEV_MODE_ID: &str = "dev-mode";

fn normalize_phone(phone: Option<String>) -> Option<String> {
    phone
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
}

/// POST /contact - store a message as unread
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ContactMessageCreate>,
) -> AppResult<(StatusCode, Json<ContactMessageReceipt>)> {
    validate_payload(&payload)?;

    let name = payload.name.trim().to_string();
    let email = payload.email.trim().to_string();
    let phone = normalize_phone(payload.phone);
    let message = payload.message;
    let created_at = now_millis();

    let Some(db) = state.database() else {
        tracing::warn!(email = %email, "Contact message received in development mode, not stored");
        let unsaved = ContactMessage {
            id: None,
            name,
            email,
            phone,
            message,
            status: STATUS_UNREAD.to_string(),
            created_at,
        };
        return Ok((
            StatusCode::CREATED,
            Json(ContactMessageReceipt::new(DEV_MODE_ID, unsaved)),
        ));
    };

    let saved = ContactRepository::new(db.clone())
        .create(name, email, phone, message, created_at)
        .await?;

    tracing::info!(message_id = %saved.id_string(), email = %saved.email, "Contact message stored");
    Ok((
        StatusCode::CREATED,
        Json(ContactMessageReceipt::new(saved.id_string(), saved)),
    ))
}

/// GET /contact/messages?skip&limit
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<SkipLimitParams>,
) -> AppResult<Json<ContactMessageList>> {
    let messages = match state.database() {
        Some(db) => ContactRepository::new(db.clone()).find_all().await?,
        None => Vec::new(),
    };

    let total = messages.len();
    Ok(Json(ContactMessageList {
        messages: params.page(messages),
        total,
        skip: params.skip,
        limit: params.limit(),
    }))
}

/// GET /contact/messages/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ContactMessage>> {
    let db = state
        .database()
        .ok_or_else(|| AppError::new(ErrorCode::ContactMessageNotFound))?;

    let message = ContactRepository::new(db.clone())
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ContactMessageNotFound))?;
    Ok(Json(message))
}
