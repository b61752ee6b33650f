//! Error types for the iLert client.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while delivering an event.
///
/// HTTP status codes are not errors at this level; they are classified into a
/// [`crate::DeliveryOutcome`]. What remains is either a transport failure
/// (the request never got a response) or something unexpected.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP error not covered by a more specific variant.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Could not connect to the endpoint (DNS, refused, TLS handshake).
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request was sent but failed before a response arrived.
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Payload could not be serialized.
    #[error("Failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Check if this error means the request never got a response.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Timeout(_) | Self::ConnectionFailed(_) | Self::RequestFailed(_)
        )
    }

    /// Short name of the error category, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::HttpError(_) => "HttpError",
            Self::Timeout(_) => "Timeout",
            Self::ConnectionFailed(_) => "ConnectionFailed",
            Self::RequestFailed(_) => "RequestFailed",
            Self::InvalidUrl(_) => "InvalidUrl",
            Self::Serialization(_) => "Serialization",
        }
    }
}

/// Render an error with its chain of sources, e.g.
/// `error sending request: client error (Connect): tcp connect error: Connection refused`.
pub(crate) fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
