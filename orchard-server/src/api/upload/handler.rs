//! Image Upload Handler
//!
//! Stores product and gallery photos under `UPLOAD_DIR` as
//! `<uuid>.<ext>`. The bytes are kept as uploaded; decoding only proves the
//! file is an image.

use axum::Json;
use axum::body::Body;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::path::Path as FsPath;
use uuid::Uuid;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ErrorCode};

/// Maximum file size (5MB)
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Accepted extensions
const SUPPORTED_FORMATS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Upload response
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
    pub filename: String,
    pub size: usize,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        too_large()
    } else {
        AppError::invalid_request(format!("Invalid multipart request: {}", e.body_text()))
    }
}

fn too_large() -> AppError {
    AppError::with_message(
        ErrorCode::FileTooLarge,
        format!(
            "File too large. Maximum size is {}MB",
            MAX_FILE_SIZE / 1024 / 1024
        ),
    )
}

/// Lower-cased extension if it is one we accept
fn supported_extension(filename: &str) -> AppResult<String> {
    let ext = FsPath::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    if SUPPORTED_FORMATS.contains(&ext.as_str()) {
        Ok(ext)
    } else {
        Err(AppError::with_message(
            ErrorCode::UnsupportedFileFormat,
            format!(
                "Unsupported file format. Allowed: {}",
                SUPPORTED_FORMATS.join(", ")
            ),
        ))
    }
}

/// Validate image file
fn validate_image(data: &[u8]) -> AppResult<()> {
    if data.is_empty() {
        return Err(AppError::new(ErrorCode::EmptyFile));
    }
    if data.len() > MAX_FILE_SIZE {
        return Err(too_large());
    }

    // Verify it's actually an image by trying to load it
    image::load_from_memory(data).map_err(|e| {
        AppError::with_message(ErrorCode::InvalidImageFile, format!("Invalid image file: {}", e))
    })?;

    Ok(())
}

/// Reject anything that could leave the upload directory
fn safe_filename(filename: &str) -> AppResult<&str> {
    if filename.is_empty()
        || filename.contains("..")
        || filename.contains('/')
        || filename.contains('\\')
    {
        return Err(AppError::new(ErrorCode::InvalidFilename));
    }
    Ok(filename)
}

/// POST /upload
pub async fn upload(
    State(state): State<ServerState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut file: Option<(Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() == Some("file") {
            let original = field.file_name().map(|s| s.to_string());
            let data = field.bytes().await.map_err(multipart_error)?;
            file = Some((original, data.to_vec()));
            break;
        }
    }

    let (original, data) = file.ok_or_else(|| AppError::new(ErrorCode::NoFileProvided))?;
    let original = original
        .filter(|name| !name.is_empty())
        .ok_or_else(|| AppError::new(ErrorCode::NoFilename))?;

    let ext = supported_extension(&original)?;
    validate_image(&data)?;

    let upload_dir = state.config.upload_path();
    tokio::fs::create_dir_all(&upload_dir)
        .await
        .map_err(|e| {
            AppError::with_message(
                ErrorCode::FileStorageFailed,
                format!("Failed to create upload directory: {}", e),
            )
        })?;

    let filename = format!("{}.{}", Uuid::new_v4(), ext);
    tokio::fs::write(upload_dir.join(&filename), &data)
        .await
        .map_err(|e| {
            AppError::with_message(
                ErrorCode::FileStorageFailed,
                format!("Failed to save file: {}", e),
            )
        })?;

    tracing::info!(
        original_name = %original,
        filename = %filename,
        size = data.len(),
        "Image uploaded successfully"
    );

    Ok(Json(UploadResponse {
        url: format!("/uploads/{}", filename),
        filename,
        size: data.len(),
        message: "File uploaded successfully".to_string(),
    }))
}

/// DELETE /upload/{filename}
pub async fn delete(
    State(state): State<ServerState>,
    Path(filename): Path<String>,
) -> AppResult<Json<DeleteResponse>> {
    let filename = safe_filename(&filename)?;
    let path = state.config.upload_path().join(filename);

    match tokio::fs::remove_file(&path).await {
        Ok(()) => {
            tracing::info!(filename = %filename, "Image deleted");
            Ok(Json(DeleteResponse {
                message: "File deleted successfully".to_string(),
            }))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(AppError::new(ErrorCode::FileNotFound))
        }
        Err(e) => Err(AppError::with_message(
            ErrorCode::FileStorageFailed,
            format!("Failed to delete file: {}", e),
        )),
    }
}

/// GET /uploads/{filename}
pub async fn serve(
    State(state): State<ServerState>,
    Path(filename): Path<String>,
) -> AppResult<Response> {
    let filename = safe_filename(&filename)?;
    let path = state.config.upload_path().join(filename);

    let content = tokio::fs::read(&path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => AppError::new(ErrorCode::FileNotFound),
        _ => {
            tracing::error!(path = %path.display(), error = %e, "Failed to read upload");
            AppError::with_message(
                ErrorCode::FileStorageFailed,
                format!("Failed to read file: {}", e),
            )
        }
    })?;

    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, mime.essence_str().to_string())],
        Body::from(content),
    )
        .into_response())
}
