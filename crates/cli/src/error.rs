//! CLI exit codes.
//!
//! Responsibilities:
//! - Define the process exit codes CheckMK interprets.
//! - Map delivery outcomes and errors to exit codes.
//!
//! Does NOT handle:
//! - Logging outcomes (see `runner`).
//!
//! Invariants:
//! - 0 means CheckMK should not retry the notification, 1 means it should.

use ilert_client::{ClientError, DeliveryOutcome};
use ilert_config::ConfigError;
use thiserror::Error;

/// Process exit codes for the plugins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// The event was handled: delivered, or rejected for good.
    Success = 0,

    /// Anything CheckMK should treat as a failed notification.
    GeneralError = 1,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&DeliveryOutcome> for ExitCode {
    fn from(outcome: &DeliveryOutcome) -> Self {
        if outcome.is_final() {
            ExitCode::Success
        } else {
            ExitCode::GeneralError
        }
    }
}

impl From<&ClientError> for ExitCode {
    fn from(_: &ClientError) -> Self {
        ExitCode::GeneralError
    }
}

/// Failure of a single plugin run before an outcome was obtained.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(
        "an unexpected error occurred. Please report a bug. Cause: {kind} {0}",
        kind = .0.kind()
    )]
    Unexpected(#[from] ClientError),
}

impl From<&RunError> for ExitCode {
    fn from(err: &RunError) -> Self {
        match err {
            RunError::Config(_) => ExitCode::GeneralError,
            RunError::Unexpected(e) => ExitCode::from(e),
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(run_err) = cause.downcast_ref::<RunError>() {
                return ExitCode::from(run_err);
            }
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
        }
        ExitCode::GeneralError
    }
}
