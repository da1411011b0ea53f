//! Content API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::ServerState;
use crate::db::models::{AboutContent, ContentSection, GalleryContent, HeroContent};
use crate::db::repository::ContentRepository;
use crate::utils::{AppError, AppResult, ErrorCode};

const DEV_MODE_SAVED: &str = "✓ Content saved (dev mode)";

#[derive(Debug, Serialize)]
pub struct SavedResponse {
    pub message: String,
}

fn parse_section(section: &str) -> AppResult<ContentSection> {
    section
        .parse()
        .map_err(|e: String| AppError::with_message(ErrorCode::ContentSectionNotFound, e))
}

fn to_json<T: Serialize>(content: &T) -> AppResult<Value> {
    serde_json::to_value(content)
        .map_err(|e| AppError::internal(format!("Failed to encode content: {}", e)))
}

async fn load<T>(state: &ServerState, section: ContentSection) -> AppResult<Value>
where
    T: Serialize + DeserializeOwned + Default,
{
    let stored = match state.database() {
        Some(db) => ContentRepository::new(db.clone()).get::<T>(section).await?,
        None => None,
    };
    to_json(&stored.unwrap_or_default())
}

async fn store<T>(state: &ServerState, section: ContentSection, body: Value) -> AppResult<String>
where
    T: Serialize + DeserializeOwned + 'static,
{
    let content: T = serde_json::from_value(body).map_err(|e| {
        AppError::validation(format!("Invalid {} content: {}", section, e))
            .with_detail("section", section.as_str())
    })?;

    let Some(db) = state.database() else {
        tracing::warn!(section = %section, "Content save skipped in development mode");
        return Ok(DEV_MODE_SAVED.to_string());
    };

    ContentRepository::new(db.clone()).upsert(section, content).await?;
    tracing::info!(section = %section, "Site content saved");
    Ok(section.saved_message().to_string())
}

/// GET /content/{section}
pub async fn get_section(
    State(state): State<ServerState>,
    Path(section): Path<String>,
) -> AppResult<Json<Value>> {
    let content = match parse_section(&section)? {
        section @ ContentSection::Hero => load::<HeroContent>(&state, section).await?,
        section @ ContentSection::About => load::<AboutContent>(&state, section).await?,
        section @ ContentSection::Gallery => load::<GalleryContent>(&state, section).await?,
    };
    Ok(Json(content))
}

/// POST /content/{section}
pub async fn save_section(
    State(state): State<ServerState>,
    Path(section): Path<String>,
    Json(body): Json<Value>,
) -> AppResult<Json<SavedResponse>> {
    let message = match parse_section(&section)? {
        section @ ContentSection::Hero => store::<HeroContent>(&state, section, body).await?,
        section @ ContentSection::About => store::<AboutContent>(&state, section, body).await?,
        section @ ContentSection::Gallery => {
            store::<GalleryContent>(&state, section, body).await?
        }
    };
    Ok(Json(SavedResponse { message }))
}
