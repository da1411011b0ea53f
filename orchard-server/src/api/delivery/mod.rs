//! Delivery preview API
//!
//! Lets the storefront show eligibility before the order is submitted.
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /delivery/check | POST | eligibility for a weight and destination |
//! | /delivery/origin | GET | orchard location and delivery policy |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/delivery/check", post(handler::check))
        .route("/delivery/origin", get(handler::origin))
}
