//! Site content API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /content/{section} | GET | stored content or the default |
//! | /content/{section} | POST | replace a section |
//!
//! Sections: `hero`, `about`, `gallery`.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/content/{section}",
        get(handler::get_section).post(handler::save_section),
    )
}
