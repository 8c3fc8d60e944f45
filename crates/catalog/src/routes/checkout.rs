//! Checkout route handler.

use axum::{Json, extract::State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use kiosk_core::{Email, ItemId};

use crate::checkout::{self, CartLine, Customer};
use crate::error::{AppError, Result};
use crate::state::AppState;

/// One cart line as it arrives on the wire.
#[derive(Debug, Deserialize)]
pub struct CheckoutLine {
    pub id: i64,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub option: Option<String>,
}

const fn default_quantity() -> i64 {
    1
}

/// Customer details attached to a checkout request.
#[derive(Debug, Deserialize)]
pub struct CheckoutCustomer {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Checkout request body.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub items: Vec<CheckoutLine>,
    pub customer: CheckoutCustomer,
}

/// Checkout response body.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub status: &'static str,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub count: i64,
}

/// Price a cart against the catalog.
///
/// POST /checkout
#[instrument(skip(state, payload), fields(lines = payload.items.len()))]
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>> {
    if payload.customer.name.trim().is_empty() {
        return Err(AppError::Validation("customer name is required".to_owned()));
    }

    let customer = Customer {
        name: payload.customer.name,
        email: Email::parse(payload.customer.email.trim())?,
        message: payload.customer.message,
    };

    let lines: Vec<CartLine> = payload
        .items
        .into_iter()
        .map(|line| CartLine {
            id: ItemId::new(line.id),
            quantity: line.quantity,
            option: line.option,
        })
        .collect();

    let summary = checkout::checkout(state.store(), &lines, &customer)?;

    tracing::info!(total = %summary.total, count = summary.count, "Cart priced");
    Ok(Json(CheckoutResponse {
        status: "ok",
        total: summary.total,
        count: summary.count,
    }))
}
