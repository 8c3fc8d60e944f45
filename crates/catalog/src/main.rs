//! Kiosk Catalog - catalog browsing and checkout service.
//!
//! This binary serves the item listing, item detail, submission,
//! category, and checkout endpoints on port 8001.
//!
//! # Architecture
//!
//! - Axum web framework serving JSON
//! - An owned in-memory [`store::CatalogStore`] constructed at startup and
//!   injected into handlers via [`state::AppState`]
//! - No database and no external services: the catalog is fixed for the
//!   process lifetime

#![cfg_attr(not(test), forbid(unsafe_code))]

use kiosk_catalog::config::CatalogConfig;
use kiosk_catalog::state::AppState;
use kiosk_catalog::store::CatalogStore;
use kiosk_catalog::{app, seed};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = CatalogConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for this crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "kiosk_catalog=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build application state around the owned store
    let store = CatalogStore::new(seed::seed_items()).expect("Failed to load catalog");
    let addr = config.socket_addr();
    let state = AppState::new(config, store);

    tracing::info!("catalog listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
