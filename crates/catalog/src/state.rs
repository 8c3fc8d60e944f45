//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::CatalogConfig;
use crate::store::CatalogStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and hands out the
/// configuration and the catalog store. The store is constructed once at
/// startup and injected here, so the core stays testable without a
/// running transport.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: CatalogConfig,
    store: CatalogStore,
}

impl AppState {
    /// Create a new application state around an owned store.
    #[must_use]
    pub fn new(config: CatalogConfig, store: CatalogStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the catalog configuration.
    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        &self.inner.config
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn store(&self) -> &CatalogStore {
        &self.inner.store
    }
}
