//! Configuration loader for the notification environment and command line.
//!
//! Responsibilities:
//! - Load `.env` files, collect `NOTIFY_*` environment variables and `key=value` tokens.
//! - Provide a builder-pattern `ConfigLoader` that merges them into a `Context`.
//! - Resolve the API key and validate the endpoint when building a `Config`.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Parsing command-line flags (see cli crate).
//! - Sending anything over the network (see client crate).
//!
//! Invariants / Assumptions:
//! - Command-line tokens take precedence over environment variables.
//! - Builder methods for the API key take precedence over context entries.
//! - Malformed entries are skipped silently; only `build()` can fail.

mod builder;
mod env;
mod error;
mod payload;

pub use builder::ConfigLoader;
pub use env::{collect_notify_vars, env_var_or_none};
pub use error::ConfigError;
pub use payload::parse_payload_token;

#[cfg(test)]
mod tests;
