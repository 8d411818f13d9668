//! Configuration management for the task list service.
//!
//! Configuration can be set via environment variables:
//! - `HOST` - Optional. Server host. Defaults to `127.0.0.1`.
//! - `PORT` - Optional. Server port. Defaults to `9000`.
//! - `DEFAULT_PAGE_SIZE` - Optional. Page size when a list request omits `limit`.
//!   Defaults to `10`, must be between 1 and 100.

use thiserror::Error;

use crate::task::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Page size applied when the caller gives no limit
    pub default_page_size: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `PORT` or `DEFAULT_PAGE_SIZE` is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "9000".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;

        let default_page_size = match std::env::var("DEFAULT_PAGE_SIZE") {
            Ok(raw) => parse_page_size(&raw)?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            host,
            port,
            default_page_size,
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_page_size(raw: &str) -> Result<usize, ConfigError> {
    let size: usize = raw.trim().parse().map_err(|e| {
        ConfigError::InvalidValue("DEFAULT_PAGE_SIZE".to_string(), format!("{}", e))
    })?;
    if size == 0 || size > MAX_PAGE_SIZE {
        return Err(ConfigError::InvalidValue(
            "DEFAULT_PAGE_SIZE".to_string(),
            format!("{} is outside 1..={}", size, MAX_PAGE_SIZE),
        ));
    }
    Ok(size)
}
