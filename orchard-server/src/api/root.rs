//! Service banner

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(index))
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    message: &'static str,
    version: &'static str,
    docs: &'static str,
}

/// GET / - service name and version
pub async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Welcome to Srebrna Sad API",
        version: env!("CARGO_PKG_VERSION"),
        docs: "/docs",
    })
}
