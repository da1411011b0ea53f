//! Apple catalog API
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /apples | GET | list varieties by name |
//! | /apples | POST | create a variety |
//! | /apples/{id} | GET | one variety |
//! | /apples/{id} | PUT | partial update |
//! | /apples/{id} | DELETE | remove a variety |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/apples", get(handler::list).post(handler::create))
        .route("/apples/", get(handler::list).post(handler::create))
        .route(
            "/apples/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
