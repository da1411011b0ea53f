//! Order API Module
//!
//! Customers place orders; the admin panel lists them and moves them
//! through their status.
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /orders | POST | price and place an order |
//! | /orders | GET | list, newest first (`skip`, `limit`, `status_filter`) |
//! | /orders/{id} | GET | one order |
//! | /orders/{id}/status | PUT | change status (`new_status`) |

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub use handler::{OrderAppleInput, OrderCreate};

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/orders", get(handler::list).post(handler::create))
        .route("/orders/", get(handler::list).post(handler::create))
        .route("/orders/{id}", get(handler::get_by_id))
        .route("/orders/{id}/status", put(handler::update_status))
}
