//! Configuration management for the iLert CheckMK notification plugins.
//!
//! This crate provides the plugin variants, the event context collected from
//! the CheckMK notification environment and the command line, API key
//! resolution, and the WATO notification-parameter descriptor.

pub mod constants;
mod loader;
pub mod parameters;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, collect_notify_vars, env_var_or_none, parse_payload_token};
pub use parameters::{
    ApiKeySource, IlertPriority, NOTIFICATION_PARAMETERS, NotificationParameters, StoredUrlPrefix,
    UrlPrefixChoice, UrlScheme,
};
pub use types::{Channel, Config, ConnectionConfig, Context, KeyStyle, PayloadFormat, Variant};
