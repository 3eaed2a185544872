//! API configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the server runs out of the box with defaults
//! suitable for local development.
//!
//! - `POSTSHIP_HOST` - Bind address (default: 127.0.0.1)
//! - `POSTSHIP_PORT` - Listen port (default: 8080)
//! - `STRIPE_PUBLISHABLE_KEY` - Key returned alongside payment intents
//!   (default: the mock test key; the payment gateway is simulated)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag (e.g. "production")

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Publishable key served when `STRIPE_PUBLISHABLE_KEY` is unset.
const MOCK_PUBLISHABLE_KEY: &str = "pk_test_mock_key";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Payment gateway publishable key returned to clients
    pub publishable_key: String,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("POSTSHIP_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("POSTSHIP_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("POSTSHIP_PORT", "8080")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("POSTSHIP_PORT".to_string(), e.to_string()))?;
        let publishable_key = get_env_or_default("STRIPE_PUBLISHABLE_KEY", MOCK_PUBLISHABLE_KEY);
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            host,
            port,
            publishable_key,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 8080,
            publishable_key: MOCK_PUBLISHABLE_KEY.to_string(),
            sentry_dsn: None,
            sentry_environment: None,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.publishable_key, "pk_test_mock_key");
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_socket_addr() {
        let config = ApiConfig {
            host: "0.0.0.0".parse().unwrap(),
            port: 9090,
            ..ApiConfig::default()
        };
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "0.0.0.0");
        assert_eq!(addr.port(), 9090);
    }
}
