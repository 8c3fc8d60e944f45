//! Catalog service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `KIOSK_CATALOG_HOST` - Bind address (default: 127.0.0.1)
//! - `KIOSK_CATALOG_PORT` - Listen port (default: 8001)
//! - `KIOSK_CATALOG_ALLOWED_ORIGINS` - Comma-separated CORS origins
//!   (default: the Vite dev hosts on ports 5173/5174)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Origins the browser frontend is served from during development.
const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:5173",
    "http://localhost:5174",
    "http://127.0.0.1:5173",
    "http://127.0.0.1:5174",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Catalog application configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Origins allowed to call the API from a browser
    pub allowed_origins: Vec<String>,
}

impl CatalogConfig {
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

        let host = get_env_or_default("KIOSK_CATALOG_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("KIOSK_CATALOG_HOST".to_owned(), e.to_string()))?;
        let port = get_env_or_default("KIOSK_CATALOG_PORT", "8001")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("KIOSK_CATALOG_PORT".to_owned(), e.to_string()))?;

        let allowed_origins = std::env::var("KIOSK_CATALOG_ALLOWED_ORIGINS")
            .map_or_else(|_| default_origins(), |raw| parse_origins(&raw));

        Ok(Self {
            host,
            port,
            allowed_origins,
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

/// Split a comma-separated origin list, dropping empty entries.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_owned)
        .collect()
}

fn default_origins() -> Vec<String> {
    DEFAULT_ALLOWED_ORIGINS
        .iter()
        .map(|origin| (*origin).to_owned())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        let origins = parse_origins("http://a.test, http://b.test ,,http://c.test");
        assert_eq!(origins, ["http://a.test", "http://b.test", "http://c.test"]);
    }

    #[test]
    fn test_parse_origins_empty_input() {
        assert!(parse_origins("").is_empty());
        assert!(parse_origins(" , ").is_empty());
    }

    #[test]
    fn test_default_origins_cover_dev_hosts() {
        let origins = default_origins();
        assert_eq!(origins.len(), 4);
        assert!(origins.contains(&"http://localhost:5173".to_owned()));
        assert!(origins.contains(&"http://127.0.0.1:5174".to_owned()));
    }

    #[test]
    fn test_socket_addr() {
        let config = CatalogConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 8001,
            allowed_origins: default_origins(),
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 8001);
    }
}
