//! Kiosk Catalog library.
//!
//! This crate provides the catalog service as a library, allowing the
//! router to be exercised in tests without binding a socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod checkout;
pub mod config;
pub mod error;
pub mod model;
pub mod query;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router with CORS and tracing layers.
///
/// Origins that fail to parse as header values are skipped with a warning
/// rather than refusing to boot.
#[must_use]
pub fn app(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config()
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Skipping unparsable CORS origin");
                None
            }
        })
        .collect();

    // Credentialed requests rule out wildcards, so methods and headers are
    // named explicitly.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    routes::routes()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
