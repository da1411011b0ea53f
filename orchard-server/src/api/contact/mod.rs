//! Contact form API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /contact | POST | submit a message |
//! | /contact/messages | GET | list messages, newest first |
//! | /contact/messages/{id} | GET | one message |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/contact", post(handler::create))
        .route("/contact/", post(handler::create))
        .route("/contact/messages", get(handler::list))
        .route("/contact/messages/{id}", get(handler::get_by_id))
}
