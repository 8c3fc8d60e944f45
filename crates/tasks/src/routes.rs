//! HTTP route handlers for the task board.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                  - Service banner
//! GET  /health            - Health check
//! GET  /tasks             - Task listing
//! POST /tasks             - Create a task (201)
//! GET  /tasks/{id}        - Task detail
//! POST /tasks/{id}/submit - Count a submission and forward it to notify
//! ```

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

use kiosk_core::TaskId;

use crate::board::Task;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Create all routes for the task service.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/tasks", get(index).post(create))
        .route("/tasks/{id}", get(show))
        .route("/tasks/{id}/submit", post(submit))
}

/// Service banner.
///
/// GET /
async fn root() -> Json<Value> {
    Json(serde_json::json!({ "service": "tasks", "status": "ok" }))
}

/// Liveness health check endpoint.
///
/// GET /health
async fn health() -> Json<Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// List all tasks in creation order.
///
/// GET /tasks
#[instrument(skip(state))]
async fn index(State(state): State<AppState>) -> Json<Vec<Task>> {
    Json(state.board().list())
}

/// Fetch one task by id.
///
/// GET /tasks/{id}
#[instrument(skip(state))]
async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Task>> {
    let task = state.board().get(TaskId::new(id))?;
    Ok(Json(task))
}

/// Task creation payload.
#[derive(Debug, Deserialize)]
struct CreateTaskRequest {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    max_submissions: Option<u32>,
}

/// Create a task.
///
/// POST /tasks
#[instrument(skip(state, payload), fields(title = %payload.title))]
async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Task>)> {
    if payload.title.trim().is_empty() || payload.description.trim().is_empty() {
        return Err(AppError::Validation("Invalid payload".to_owned()));
    }

    let task = state.board().create(
        &payload.title,
        &payload.description,
        payload.max_submissions.unwrap_or(1),
    );

    tracing::info!(task = %task.id, "Task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// Response for a counted submission.
#[derive(Debug, Serialize)]
struct SubmitResponse {
    status: &'static str,
    submissions_count: u32,
}

/// Count a submission against a task and forward it to the notify
/// service.
///
/// POST /tasks/{id}/submit
///
/// The notify delivery is best-effort: a transport failure is logged and
/// never affects the response.
#[instrument(skip(state, payload))]
async fn submit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Option<Json<Value>>,
) -> Result<Json<SubmitResponse>> {
    let data = payload.map_or_else(|| Value::Object(serde_json::Map::new()), |Json(value)| value);

    let task_id = TaskId::new(id);
    let count = state.board().submit(task_id)?;

    if let Err(error) = state.notify().task_submitted(task_id, &data).await {
        tracing::warn!(task = id, %error, "Failed to forward submission to notify");
    }

    Ok(Json(SubmitResponse {
        status: "ok",
        submissions_count: count,
    }))
}
