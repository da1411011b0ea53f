//! Apple API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Apple, AppleCreate, AppleList, AppleUpdate};
use crate::db::repository::{AppleRepository, RepoError};
use crate::utils::validation::validate_payload;
use crate::utils::{AppError, AppResult, ErrorCode};

fn apple_not_found() -> AppError {
    AppError::new(ErrorCode::AppleNotFound)
}

fn map_not_found(err: RepoError) -> AppError {
    match err {
        RepoError::NotFound(_) => apple_not_found(),
        other => other.into(),
    }
}

/// GET /apples - all varieties sorted by name
///
/// Development mode serves the built-in demo catalog.
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<AppleList>> {
    let Some(db) = state.database() else {
        return Ok(Json(AppleList {
            apples: Apple::demo_catalog(),
        }));
    };

    let apples = AppleRepository::new(db.clone()).find_all().await?;
    Ok(Json(AppleList { apples }))
}

/// GET /apples/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Apple>> {
    let db = state.database().ok_or_else(apple_not_found)?;
    let apple = AppleRepository::new(db.clone())
        .find_by_id(&id)
        .await?
        .ok_or_else(apple_not_found)?;
    Ok(Json(apple))
}

/// POST /apples
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<AppleCreate>,
) -> AppResult<(StatusCode, Json<Apple>)> {
    validate_payload(&payload)?;
    let db = state.require_db()?;

    let apple = AppleRepository::new(db.clone()).create(payload).await?;

    tracing::info!(apple_id = %apple.id_string(), name = %apple.name, "Apple created");
    Ok((StatusCode::CREATED, Json(apple)))
}

/// PUT /apples/{id} - only the supplied fields change
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<AppleUpdate>,
) -> AppResult<Json<Apple>> {
    validate_payload(&payload)?;
    let db = state.require_db()?;

    let apple = AppleRepository::new(db.clone())
        .update(&id, payload)
        .await
        .map_err(map_not_found)?;

    tracing::info!(apple_id = %apple.id_string(), "Apple updated");
    Ok(Json(apple))
}

/// DELETE /apples/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let db = state.require_db()?;

    if !AppleRepository::new(db.clone()).delete(&id).await? {
        return Err(apple_not_found());
    }

    tracing::info!(apple_id = %id, "Apple deleted");
    Ok(StatusCode::NO_CONTENT)
}
