//! HTTP transport for event delivery.
//!
//! Responsibilities:
//! - Define the [`Transport`] seam the sender posts through.
//! - Provide [`HttpTransport`], the reqwest-backed implementation.
//! - Translate reqwest failures into [`ClientError`] variants.
//!
//! Does NOT handle:
//! - Interpreting HTTP status codes (see [`crate::sender`]).
//! - Retries. Each invocation sends exactly one request; CheckMK owns retrying.
//!
//! Invariants:
//! - The API key only ever appears in [`EventRequest::url`]; every log line and
//!   error message uses the redacted URL instead.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use ilert_config::PayloadFormat;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tracing::debug;

use crate::error::{ClientError, Result, error_chain};

/// Name of the header identifying the sending integration.
pub const AGENT_HEADER: &str = "Agent";

/// Fallback used when a response body cannot be read.
const UNREADABLE_BODY: &str = "Could not read response body";

const MAX_REDIRECTS: usize = 10;

/// One fully prepared event POST.
#[derive(Clone)]
pub struct EventRequest {
    /// Target URL including the encoded API key.
    pub url: String,
    /// Target URL with the API key masked, for diagnostics.
    pub display_url: String,
    /// Body format, determining `Content-Type` and `Accept`.
    pub format: PayloadFormat,
    /// Value of the `Agent` header, if this variant sends one.
    pub agent: Option<String>,
    /// Rendered payload.
    pub body: String,
    /// Total time allowed for the request.
    pub timeout: Duration,
}

impl fmt::Debug for EventRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRequest")
            .field("url", &self.display_url)
            .field("format", &self.format)
            .field("agent", &self.agent)
            .field("body_len", &self.body.len())
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// What came back from the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    /// Canonical reason phrase for `status`, empty when the code has none.
    pub reason: String,
    pub body: String,
}

/// Something that can deliver an [`EventRequest`].
pub trait Transport {
    fn post(&self, request: EventRequest) -> impl Future<Output = Result<TransportResponse>>;
}

/// [`Transport`] backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Build the underlying HTTP client.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::HttpError` if the TLS backend fails to initialise.
    pub fn new() -> Result<Self> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    async fn post(&self, request: EventRequest) -> Result<TransportResponse> {
        let mime = request.format.mime_type();
        let timeout = request.timeout;

        debug!(url = %request.display_url, content_type = mime, "POST event");

        let mut builder = self
            .http
            .post(&request.url)
            .header(CONTENT_TYPE, mime)
            .header(ACCEPT, mime)
            .timeout(timeout)
            .body(request.body);
        if let Some(agent) = request.agent {
            builder = builder.header(AGENT_HEADER, agent);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| map_reqwest_error(e, timeout))?;

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                debug!(error = %error_chain(&e.without_url()), "Failed to read response body");
                UNREADABLE_BODY.to_string()
            }
        };

        Ok(TransportResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}

/// Classify a reqwest failure. The URL is stripped first since it carries the API key.
fn map_reqwest_error(err: reqwest::Error, timeout: Duration) -> ClientError {
    let err = err.without_url();
    if err.is_timeout() {
        ClientError::Timeout(timeout)
    } else if err.is_connect() {
        ClientError::ConnectionFailed(error_chain(&err))
    } else if err.is_request() || err.is_body() || err.is_redirect() {
        ClientError::RequestFailed(error_chain(&err))
    } else {
        ClientError::HttpError(err)
    }
}
