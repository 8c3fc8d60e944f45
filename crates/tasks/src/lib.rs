//! Kiosk Tasks library.
//!
//! This crate provides the task board service as a library, allowing the
//! router to be exercised in tests without binding a socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod board;
pub mod config;
pub mod error;
pub mod notify;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router with CORS and tracing layers.
///
/// The board has no credentialed callers, so CORS stays permissive.
#[must_use]
pub fn app(state: AppState) -> Router {
    routes::routes()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
