//! HTTP route handlers for the notify service.
//!
//! # Route Structure
//!
//! ```text
//! GET  /        - Service banner
//! GET  /health  - Health check
//! POST /notify  - Acknowledge a task submission
//! ```

use axum::{
    Json, Router,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::instrument;

use kiosk_core::TaskId;

/// Create all routes for the notify service.
pub fn routes() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/notify", post(notify))
}

/// Service banner.
///
/// GET /
async fn root() -> Json<Value> {
    Json(serde_json::json!({ "service": "notify", "status": "ok" }))
}

/// Liveness health check endpoint.
///
/// GET /health
async fn health() -> Json<Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Notification payload.
///
/// `data` must be a JSON object; its contents are opaque and only
/// acknowledged, never stored.
#[derive(Debug, Deserialize)]
struct NotifyRequest {
    task_id: TaskId,
    #[allow(dead_code)]
    data: Map<String, Value>,
}

/// Acknowledgement for a received notification.
#[derive(Debug, Serialize)]
struct NotifyResponse {
    received: bool,
    task_id: TaskId,
}

/// Acknowledge a task submission.
///
/// POST /notify
#[instrument(skip(payload), fields(task = %payload.task_id))]
async fn notify(Json(payload): Json<NotifyRequest>) -> Json<NotifyResponse> {
    Json(NotifyResponse {
        received: true,
        task_id: payload.task_id,
    })
}
