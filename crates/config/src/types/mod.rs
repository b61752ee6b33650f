//! Configuration type definitions for the iLert CheckMK plugins.
//!
//! Responsibilities:
//! - Define the plugin variants and what distinguishes them (format, channel, fallback key).
//! - Define the event `Context` collected for one notification.
//! - Define the resolved per-invocation `Config`.
//!
//! Does NOT handle:
//! - Reading the environment or command line (see `loader` module).
//! - Rendering payloads or sending requests (see client crate).
//!
//! Invariants:
//! - The API key is held as `secrecy::SecretString` to prevent accidental logging.
//! - A `Context` built by the loader always carries the plugin version marker.

mod connection;
mod context;
mod variant;

pub use connection::{Config, ConnectionConfig};
pub use context::Context;
pub use variant::{Channel, KeyStyle, PayloadFormat, Variant};
