//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that merges the event context.
//! - Support loading from `.env`, the process environment, and direct builder methods.
//! - Build the final `Config`, resolving the API key and validating the endpoint.
//!
//! Does NOT handle:
//! - Selecting `NOTIFY_*` variables (delegated to env.rs).
//! - Splitting `key=value` tokens (delegated to payload.rs).
//!
//! Invariants / Assumptions:
//! - Context merge order is: version marker, environment, command-line tokens.
//!   Later sources override earlier ones on key collision.
//! - An API key set through the builder takes precedence over the context fallback entry.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::ffi::OsStr;
use std::time::Duration;
use tracing::debug;

use super::env::{collect_notify_vars, env_var_or_none};
use super::error::ConfigError;
use super::payload::parse_payload_token;
use crate::constants::{
    DEFAULT_ENDPOINT, DEFAULT_PORT, DOTENV_DISABLED_VAR, PLUGIN_VERSION, PLUGIN_VERSION_KEY,
    REQUEST_TIMEOUT_SECS,
};
use crate::types::{Config, ConnectionConfig, Context, Variant};

/// Configuration loader that builds a `Config` from the notification environment and CLI.
pub struct ConfigLoader {
    variant: Variant,
    env_entries: Vec<(String, String)>,
    payload_entries: Vec<(String, String)>,
    endpoint: Option<String>,
    port: Option<u16>,
    api_key: Option<SecretString>,
}

impl ConfigLoader {
    /// Create a new configuration loader for the given plugin variant.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            env_entries: Vec::new(),
            payload_entries: Vec::new(),
            endpoint: None,
            port: None,
            api_key: None,
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            env_var_or_none(DOTENV_DISABLED_VAR).as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Collect alert context from the process environment.
    pub fn from_env(self) -> Self {
        self.with_env_vars(std::env::vars_os())
    }

    /// Collect alert context from the given environment snapshot.
    pub fn with_env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<OsStr>,
        V: AsRef<OsStr>,
    {
        let collected = collect_notify_vars(vars, self.variant.key_style());
        debug!(count = collected.len(), "Collected notification variables");
        self.env_entries.extend(collected);
        self
    }

    /// Add trailing `key=value` command-line tokens. Malformed tokens are dropped.
    pub fn with_payload<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            if let Some((key, value)) = parse_payload_token(token.as_ref()) {
                self.payload_entries
                    .push((key.to_string(), value.to_string()));
            }
        }
        self
    }

    /// Set the API key explicitly (highest priority).
    pub fn with_api_key(mut self, api_key: String) -> Self {
        self.api_key = Some(SecretString::new(api_key.into()));
        self
    }

    /// Set the iLert API endpoint.
    pub fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Set the iLert API port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Merge the context without resolving anything else.
    pub fn context(&self) -> Context {
        let mut context = Context::new();
        context.insert(PLUGIN_VERSION_KEY, PLUGIN_VERSION);
        context.extend(self.env_entries.iter().cloned());
        context.extend(self.payload_entries.iter().cloned());
        context
    }

    /// Build the final configuration.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingApiKey` if neither the builder nor the context
    ///   provides a non-blank API key.
    /// - `ConfigError::InvalidValue` if the endpoint is not a bare http(s) URL.
    pub fn build(self) -> Result<Config, ConfigError> {
        let context = self.context();
        let fallback_key = self.variant.api_key_fallback();

        let api_key = match self.api_key {
            Some(key) if !is_blank(&key) => key,
            _ => context
                .get(fallback_key)
                .filter(|value| !value.trim().is_empty())
                .map(|value| SecretString::new(value.to_string().into()))
                .ok_or(ConfigError::MissingApiKey { fallback_key })?,
        };

        let endpoint = validate_and_normalize_endpoint(
            self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT),
        )?;

        let connection = ConnectionConfig {
            endpoint,
            port: self.port.unwrap_or(DEFAULT_PORT),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        };

        Ok(Config {
            variant: self.variant,
            connection,
            api_key,
            context,
        })
    }
}

fn is_blank(secret: &SecretString) -> bool {
    use secrecy::ExposeSecret;
    secret.expose_secret().trim().is_empty()
}

/// Validate the endpoint and strip the trailing slash.
///
/// The port and events path are appended verbatim, so the endpoint must be a
/// scheme and host only.
fn validate_and_normalize_endpoint(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let invalid = |message: String| ConfigError::InvalidValue {
        var: "endpoint".into(),
        message,
    };

    if trimmed.is_empty() {
        return Err(invalid("must not be empty".into()));
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| {
        invalid(format!(
            "must be an absolute http(s) URL with a host (e.g. {DEFAULT_ENDPOINT}): {e}"
        ))
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(invalid(format!(
            "scheme must be http or https (e.g. {DEFAULT_ENDPOINT}), got: {scheme}"
        )));
    }

    if parsed.host_str().is_none() {
        return Err(invalid(format!(
            "host is required (e.g. {DEFAULT_ENDPOINT})"
        )));
    }

    if let Some(port) = parsed.port() {
        return Err(invalid(format!(
            "must not contain a port (got {port}); use --port instead"
        )));
    }

    if parsed.path() != "/" || parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid(
            "must not contain a path, query or fragment".into(),
        ));
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_normalization() {
        assert_eq!(
            validate_and_normalize_endpoint("https://api.ilert.com/").unwrap(),
            "https://api.ilert.com"
        );
        assert_eq!(
            validate_and_normalize_endpoint("  http://127.0.0.1 ").unwrap(),
            "http://127.0.0.1"
        );
    }

    #[test]
    fn test_default_port_in_endpoint_is_dropped() {
        assert_eq!(
            validate_and_normalize_endpoint("https://api.ilert.com:443").unwrap(),
            "https://api.ilert.com"
        );
    }

    #[test]
    fn test_endpoint_rejections() {
        for raw in [
            "",
            "api.ilert.com",
            "ftp://api.ilert.com",
            "https://api.ilert.com:8443",
            "https://api.ilert.com/api",
            "https://api.ilert.com/?x=1",
        ] {
            let err = validate_and_normalize_endpoint(raw).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "endpoint"),
                "expected endpoint error for {raw:?}, got {err:?}"
            );
        }
    }
}
