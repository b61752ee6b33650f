//! One plugin invocation from start to exit code.
//!
//! Responsibilities:
//! - Bootstrap: logging, `.env`, argument parsing, HTTP client.
//! - Resolve the configuration, deliver the event, and log the outcome.
//!
//! Invariants:
//! - Logging is installed first, so every failure lands on stdout as a log line.
//! - `load_dotenv()` runs BEFORE CLI parsing so `.env` can provide clap env defaults.
//! - Configuration errors are reported before any request is made.

use anyhow::Context as _;
use ilert_client::{DeliveryOutcome, EventSender, HttpTransport, Transport};
use ilert_config::constants::PLUGIN_VERSION;
use ilert_config::{ConfigLoader, Variant};
use tracing::{error, info, warn};

use crate::args::Cli;
use crate::error::{ExitCode, ExitCodeExt, RunError};
use crate::logging;

/// Run the plugin for `variant` against the real process environment.
pub async fn run(variant: Variant) -> ExitCode {
    logging::init();

    let (cli, loader, transport) = match bootstrap(variant) {
        Ok(Some(parts)) => parts,
        Ok(None) => return ExitCode::Success,
        Err(e) => {
            error!("{e:#}");
            return e.exit_code();
        }
    };

    execute(&cli, loader.from_env(), transport).await
}

/// Returns `None` when the invocation only asked for the version.
fn bootstrap(variant: Variant) -> anyhow::Result<Option<(Cli, ConfigLoader, HttpTransport)>> {
    let loader = ConfigLoader::new(variant)
        .load_dotenv()
        .context("Failed to load environment")?;

    let cli = Cli::parse_for(variant);
    if cli.version {
        println!("{PLUGIN_VERSION}");
        return Ok(None);
    }

    let transport = HttpTransport::new()
        .map_err(RunError::from)
        .context("Failed to create HTTP client")?;

    Ok(Some((cli, loader, transport)))
}

/// Apply `cli` to `loader`, deliver the event through `transport`, and report.
pub async fn execute<T: Transport>(cli: &Cli, loader: ConfigLoader, transport: T) -> ExitCode {
    match deliver(cli, loader, transport).await {
        Ok(outcome) => report(&outcome),
        Err(err) => {
            error!("{err}");
            ExitCode::from(&err)
        }
    }
}

async fn deliver<T: Transport>(
    cli: &Cli,
    loader: ConfigLoader,
    transport: T,
) -> Result<DeliveryOutcome, RunError> {
    let config = cli.configure(loader).build()?;
    let outcome = EventSender::new(transport).send(&config).await?;
    Ok(outcome)
}

/// Log the outcome and pick the exit code.
pub fn report(outcome: &DeliveryOutcome) -> ExitCode {
    match outcome {
        DeliveryOutcome::Delivered { .. } => info!("Event has been sent to iLert"),
        DeliveryOutcome::RateLimited { body } => {
            warn!("too many requests, will try later. Server response: {body}")
        }
        DeliveryOutcome::Rejected { body, .. } => {
            warn!("event not accepted by iLert. Reason: {body}")
        }
        DeliveryOutcome::ServerError {
            status,
            reason,
            body,
        } => error!(
            "could not send event to iLert. HTTP error code {status}, reason: {reason}, {body}"
        ),
        DeliveryOutcome::TransportError { reason } => {
            error!("could not send event to iLert. Reason: {reason}")
        }
    }
    ExitCode::from(outcome)
}
