//! Centralized constants for the iLert CheckMK plugins.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Plugin Identity
// =============================================================================

/// Version reported by `--version` and injected into every event context.
pub const PLUGIN_VERSION: &str = "1.0";

/// Context key carrying [`PLUGIN_VERSION`].
pub const PLUGIN_VERSION_KEY: &str = "PLUGIN_VERSION";

/// Prefix of the `Agent` header sent by the JSON plugin, followed by `/{PLUGIN_VERSION}`.
pub const AGENT_PREFIX: &str = "checkmk/extension";

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default iLert API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.ilert.com";

/// Default iLert API port.
pub const DEFAULT_PORT: u16 = 443;

/// HTTP request timeout in seconds. Not configurable.
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Path prefix of the events API, followed by `/{channel}/{api_key}`.
pub const EVENTS_PATH: &str = "/api/v1/events";

// =============================================================================
// Notification Context
// =============================================================================

/// Substring that marks an environment variable as alert context.
pub const NOTIFY_MARKER: &str = "NOTIFY_";

/// Environment variable that disables `.env` loading when set to `1` or `true`.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";
