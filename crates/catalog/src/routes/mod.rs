//! HTTP route handlers for the catalog service.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                   - Service banner
//! GET  /health             - Health check
//!
//! # Items
//! GET  /items              - Paginated, filtered item listing
//! GET  /items/{id}         - Item detail
//! POST /items/{id}/submit  - Record a submission against an item
//! GET  /categories         - Distinct sorted category list
//!
//! # Checkout
//! POST /checkout           - Price a cart
//! ```

pub mod checkout;
pub mod items;
pub mod meta;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the item routes router.
pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(items::index))
        .route("/{id}", get(items::show))
        .route("/{id}/submit", post(items::submit))
}

/// Create all routes for the catalog service.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(meta::root))
        .route("/health", get(meta::health))
        .nest("/items", item_routes())
        .route("/categories", get(items::categories))
        .route("/checkout", post(checkout::create))
}
