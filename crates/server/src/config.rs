//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; defaults suit local development.
//!
//! - `ORDER_DESK_DATABASE_URL` - SQLite connection URL (default: `sqlite:order_desk.db`).
//!   The database file is created and the schema bootstrapped if it does not exist.
//! - `ORDER_DESK_HOST` - Bind address (default: 127.0.0.1)
//! - `ORDER_DESK_PORT` - Listen port (default: 3000)

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database connection URL
    pub database_url: String,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file first if one is present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `ORDER_DESK_HOST` or
    /// `ORDER_DESK_PORT` cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_env_or_default("ORDER_DESK_DATABASE_URL", "sqlite:order_desk.db");
        let host = parse_value("ORDER_DESK_HOST", &get_env_or_default("ORDER_DESK_HOST", "127.0.0.1"))?;
        let port = parse_value("ORDER_DESK_PORT", &get_env_or_default("ORDER_DESK_PORT", "3000"))?;

        Ok(Self {
            database_url,
            host,
            port,
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
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse an environment value, naming the offending variable on failure.
fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr_combines_host_and_port() {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            host: "127.0.0.1".parse().expect("valid address"),
            port: 8080,
        };
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_get_env_or_default_falls_back() {
        assert_eq!(
            get_env_or_default("ORDER_DESK_NONEXISTENT_VAR", "fallback"),
            "fallback"
        );
    }

    #[test]
    fn test_valid_values_parse() {
        let host: IpAddr = parse_value("ORDER_DESK_HOST", "0.0.0.0").expect("valid host");
        assert_eq!(host.to_string(), "0.0.0.0");

        let port: u16 = parse_value("ORDER_DESK_PORT", "3000").expect("valid port");
        assert_eq!(port, 3000);
    }

    #[test]
    fn test_malformed_port_is_rejected() {
        let err = parse_value::<u16>("ORDER_DESK_PORT", "not-a-port").expect_err("rejects");
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "ORDER_DESK_PORT"));

        // Out of range for u16 is rejected too.
        parse_value::<u16>("ORDER_DESK_PORT", "70000").expect_err("rejects");
    }

    #[test]
    fn test_malformed_host_is_rejected() {
        let err = parse_value::<IpAddr>("ORDER_DESK_HOST", "not-an-ip").expect_err("rejects");
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "ORDER_DESK_HOST"));
    }
}
