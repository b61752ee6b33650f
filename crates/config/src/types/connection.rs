//! Connection configuration types for the iLert events API.
//!
//! Responsibilities:
//! - Define connection settings (endpoint, port, timeout).
//! - Define the resolved `Config` for one plugin invocation.
//!
//! Does NOT handle:
//! - Configuration loading from env/CLI (see `loader` module).
//! - URL composition and actual network connections (see client crate).
//!
//! Invariants:
//! - `endpoint` is an absolute http(s) URL without a trailing slash.
//! - The request timeout is fixed and not user-configurable.

use crate::constants::{DEFAULT_ENDPOINT, DEFAULT_PORT, REQUEST_TIMEOUT_SECS};
use crate::types::{Context, Variant};
use secrecy::SecretString;
use std::time::Duration;

/// Connection settings for the iLert API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Base URL of the iLert API, without port (e.g., https://api.ilert.com)
    pub endpoint: String,
    /// Port appended to the endpoint
    pub port: u16,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            port: DEFAULT_PORT,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

/// Everything needed to deliver one event.
#[derive(Debug, Clone)]
pub struct Config {
    /// Which plugin binary is running
    pub variant: Variant,
    /// Connection settings
    pub connection: ConnectionConfig,
    /// iLert alert source API key
    pub api_key: SecretString,
    /// Alert context to deliver
    pub context: Context,
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_connection_defaults() {
        let connection = ConnectionConfig::default();
        assert_eq!(connection.endpoint, "https://api.ilert.com");
        assert_eq!(connection.port, 443);
        assert_eq!(connection.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_debug_does_not_leak_api_key() {
        let config = Config {
            variant: Variant::Extension,
            connection: ConnectionConfig::default(),
            api_key: SecretString::new("il1api-super-secret".to_string().into()),
            context: Context::new(),
        };

        let debug = format!("{config:?}");
        assert!(!debug.contains("il1api-super-secret"));
        assert_eq!(config.api_key.expose_secret(), "il1api-super-secret");
    }
}
