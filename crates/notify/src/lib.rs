//! Kiosk Notify library.
//!
//! This crate provides the notify service as a library, allowing the
//! router to be exercised in tests without binding a socket.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod routes;

use axum::Router;
use tower_http::trace::TraceLayer;

/// Build the full application router.
///
/// The service is stateless, so there is no application state to inject.
#[must_use]
pub fn app() -> Router {
    routes::routes().layer(TraceLayer::new_for_http())
}
