//! iLert events API client.
//!
//! This crate renders a CheckMK alert context as a JSON or XML payload and
//! delivers it to the iLert events endpoint, reporting the result as a typed
//! [`DeliveryOutcome`].

pub mod endpoints;
pub mod error;
pub mod payload;
pub mod sender;
pub mod transport;

pub use error::{ClientError, Result};
pub use payload::{Payload, render};
pub use sender::{DeliveryOutcome, EventSender, build_request};
pub use transport::{EventRequest, HttpTransport, Transport, TransportResponse};
