//! Health check endpoint

use axum::{routing::get, Json, Router};
use serde_json::json;

use crate::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "module": "churnsight-gateway",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
