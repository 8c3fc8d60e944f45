//! Service banner and health endpoints.

use axum::Json;
use serde_json::{Value, json};

/// Service banner.
///
/// GET /
pub async fn root() -> Json<Value> {
    Json(json!({ "service": "catalog", "status": "ok" }))
}

/// Liveness health check endpoint.
///
/// Returns ok if the server is running. Does not check dependencies.
///
/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
