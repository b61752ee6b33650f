//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test context merging from the environment and command-line tokens.
//! - Test API key resolution and precedence for every plugin variant.
//! - Test `.env` loading and the `DOTENV_DISABLED` gate.
//!
//! Does NOT handle:
//! - Token splitting rules (tested in payload.rs).
//! - `NOTIFY_` selection rules in isolation (tested in env.rs).
//!
//! Invariants:
//! - Tests that touch process-global state use `serial_test` and `global_test_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
