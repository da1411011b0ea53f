//! Upload Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /upload | POST | store an image (multipart field `file`) |
//! | /upload/{filename} | DELETE | remove a stored image |
//! | /uploads/{filename} | GET | serve a stored image |

mod handler;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
};

use crate::core::ServerState;

pub use handler::{MAX_FILE_SIZE, UploadResponse};

/// Request body ceiling; leaves room for multipart framing around a
/// [`MAX_FILE_SIZE`] file so the handler can answer 413 itself
const BODY_LIMIT: usize = MAX_FILE_SIZE + 1024 * 1024;

/// Build upload router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/upload",
            post(handler::upload).layer(DefaultBodyLimit::max(BODY_LIMIT)),
        )
        .route(
            "/upload/",
            post(handler::upload).layer(DefaultBodyLimit::max(BODY_LIMIT)),
        )
        .route("/upload/{filename}", delete(handler::delete))
        .route("/uploads/{filename}", get(handler::serve))
}
