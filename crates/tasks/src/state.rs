//! Application state shared across handlers.

use std::sync::Arc;

use crate::board::TaskBoard;
use crate::config::TasksConfig;
use crate::notify::NotifyClient;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; hands out the configuration, the task
/// board, and the notify client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: TasksConfig,
    board: TaskBoard,
    notify: NotifyClient,
}

impl AppState {
    /// Create a new application state around an owned board.
    #[must_use]
    pub fn new(config: TasksConfig, board: TaskBoard) -> Self {
        let notify = NotifyClient::new(config.notify_url.clone());
        Self {
            inner: Arc::new(AppStateInner {
                config,
                board,
                notify,
            }),
        }
    }

    /// Get a reference to the task service configuration.
    #[must_use]
    pub fn config(&self) -> &TasksConfig {
        &self.inner.config
    }

    /// Get a reference to the task board.
    #[must_use]
    pub fn board(&self) -> &TaskBoard {
        &self.inner.board
    }

    /// Get a reference to the notify client.
    #[must_use]
    pub fn notify(&self) -> &NotifyClient {
        &self.inner.notify
    }
}
