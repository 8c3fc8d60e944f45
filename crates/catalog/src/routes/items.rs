//! Item browsing and submission route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use kiosk_core::{Email, ItemId};

use crate::error::{AppError, Result};
use crate::model::{Item, Submission};
use crate::query::{self, DEFAULT_PER_PAGE, ItemPage, ListParams, MIN_PAGE};
use crate::state::AppState;

/// Listing query parameters as they arrive on the wire.
#[derive(Debug, Deserialize)]
pub struct ListItemsQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub q: Option<String>,
    pub category: Option<String>,
}

/// List items with optional filters and pagination.
///
/// GET /items
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(raw): Query<ListItemsQuery>,
) -> Result<Json<ItemPage>> {
    let params = ListParams::new(
        raw.page.unwrap_or(MIN_PAGE),
        raw.per_page.unwrap_or(DEFAULT_PER_PAGE),
        raw.q,
        raw.category,
    )?;

    Ok(Json(query::list_items(state.store(), &params)))
}

/// Fetch one item by id.
///
/// GET /items/{id}
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Result<Json<Item>> {
    let item = state.store().get(ItemId::new(id))?;
    Ok(Json(item.clone()))
}

/// Submission form data.
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Response for a recorded submission.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub status: &'static str,
    pub count: usize,
}

/// Record a submission against an item.
///
/// POST /items/{id}/submit
#[instrument(skip(state, form), fields(item = id))]
pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(form): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>> {
    if form.name.trim().is_empty() || form.message.trim().is_empty() {
        return Err(AppError::Validation(
            "name and message are required".to_owned(),
        ));
    }

    let email = Email::parse(form.email.trim())?;
    let submission = Submission {
        name: form.name,
        email,
        message: form.message,
    };

    let count = state.store().record_submission(ItemId::new(id), submission)?;

    tracing::info!(item = id, count, "Submission recorded");
    Ok(Json(SubmitResponse {
        status: "ok",
        count,
    }))
}

/// List distinct item categories.
///
/// GET /categories
#[instrument(skip(state))]
pub async fn categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(query::list_categories(state.store()))
}
