//! Task service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `KIOSK_TASKS_HOST` - Bind address (default: 127.0.0.1)
//! - `KIOSK_TASKS_PORT` - Listen port (default: 3001)
//! - `KIOSK_TASKS_NOTIFY_URL` - Base URL of the notify service
//!   (default: <http://localhost:8002>)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Task service configuration.
#[derive(Debug, Clone)]
pub struct TasksConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Base URL of the notify service submissions are forwarded to
    pub notify_url: String,
}

impl TasksConfig {
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

        let host = get_env_or_default("KIOSK_TASKS_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("KIOSK_TASKS_HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("KIOSK_TASKS_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("KIOSK_TASKS_PORT".to_owned(), e.to_string()))?;
        let notify_url = get_env_or_default("KIOSK_TASKS_NOTIFY_URL", "http://localhost:8002")
            .trim_end_matches('/')
            .to_owned();

        Ok(Self {
            host,
            port,
            notify_url,
        })
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

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = TasksConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3001,
            notify_url: "http://localhost:8002".to_owned(),
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3001);
    }
}
