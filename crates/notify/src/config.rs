//! Notify service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `KIOSK_NOTIFY_HOST` - Bind address (default: 127.0.0.1)
//! - `KIOSK_NOTIFY_PORT` - Listen port (default: 8002)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Notify service configuration.
#[derive(Debug, Clone)]
pub struct NotifyConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl NotifyConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("KIOSK_NOTIFY_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("KIOSK_NOTIFY_HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("KIOSK_NOTIFY_PORT", "8002")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("KIOSK_NOTIFY_PORT".to_owned(), e.to_string()))?;

        Ok(Self { host, port })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
