//! Event delivery and outcome classification.
//!
//! Responsibilities:
//! - Turn a resolved [`Config`] into one [`EventRequest`].
//! - Post it through a [`Transport`] and classify the result.
//!
//! Does NOT handle:
//! - Logging the outcome or choosing an exit code (see the CLI crate).
//!
//! Invariants:
//! - [`EventSender::send`] posts at most once.
//! - HTTP status codes never surface as errors; they become a [`DeliveryOutcome`].

use ilert_config::Config;
use ilert_config::constants::{AGENT_PREFIX, PLUGIN_VERSION};
use secrecy::ExposeSecret;
use tracing::info;

use crate::endpoints::{event_url, redacted_event_url};
use crate::error::Result;
use crate::payload;
use crate::transport::{EventRequest, Transport, TransportResponse};

/// How a delivery attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// iLert accepted the event (2xx).
    Delivered { status: u16 },
    /// iLert asked us to slow down (429).
    RateLimited { body: String },
    /// iLert refused the event (4xx other than 429).
    Rejected { status: u16, body: String },
    /// Any other non-success status.
    ServerError {
        status: u16,
        reason: String,
        body: String,
    },
    /// No response was received.
    TransportError { reason: String },
}

impl DeliveryOutcome {
    /// Classify a server response by status code.
    pub fn classify(response: TransportResponse) -> Self {
        let TransportResponse {
            status,
            reason,
            body,
        } = response;
        match status {
            200..=299 => Self::Delivered { status },
            429 => Self::RateLimited { body },
            400..=499 => Self::Rejected { status, body },
            _ => Self::ServerError {
                status,
                reason,
                body,
            },
        }
    }

    /// Whether CheckMK should consider the notification handled.
    ///
    /// Rejected events count as handled: resending the same event would be
    /// rejected again.
    pub fn is_final(&self) -> bool {
        matches!(self, Self::Delivered { .. } | Self::Rejected { .. })
    }
}

/// Render the payload and compose the request for `config`.
pub fn build_request(config: &Config) -> Result<EventRequest> {
    let variant = config.variant;
    let connection = &config.connection;
    let payload = payload::render(variant.format(), &config.context)?;

    Ok(EventRequest {
        url: event_url(
            &connection.endpoint,
            connection.port,
            variant.channel(),
            config.api_key.expose_secret(),
        ),
        display_url: redacted_event_url(
            &connection.endpoint,
            connection.port,
            variant.channel(),
        ),
        format: payload.format,
        agent: variant
            .sends_agent_header()
            .then(|| format!("{AGENT_PREFIX}/{PLUGIN_VERSION}")),
        body: payload.body,
        timeout: connection.timeout,
    })
}

/// Sends events through a [`Transport`].
#[derive(Debug)]
pub struct EventSender<T> {
    transport: T,
}

impl<T: Transport> EventSender<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Deliver the event described by `config`.
    ///
    /// # Errors
    ///
    /// Only failures that are neither an HTTP status nor a transport problem,
    /// such as payload serialization or an unclassified HTTP client error.
    pub async fn send(&self, config: &Config) -> Result<DeliveryOutcome> {
        let request = build_request(config)?;

        info!("Sending event to iLert...");

        match self.transport.post(request).await {
            Ok(response) => Ok(DeliveryOutcome::classify(response)),
            Err(err) if err.is_transport() => Ok(DeliveryOutcome::TransportError {
                reason: err.to_string(),
            }),
            Err(err) => Err(err),
        }
    }
}
