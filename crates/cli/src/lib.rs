//! iLert CheckMK notification plugins.
//!
//! Responsibilities:
//! - Parse the command line shared by the three plugin binaries.
//! - Deliver one event per invocation and log the outcome to stdout.
//! - Map the outcome to the exit code CheckMK uses to decide on retries.
//!
//! Does NOT handle:
//! - Payload rendering or HTTP (see `crates/client`).
//! - Context collection and API key resolution (see `crates/config`).

pub mod args;
pub mod error;
pub mod logging;
pub mod runner;

pub use error::ExitCode;
pub use runner::{execute, report, run};
