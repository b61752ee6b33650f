//! Common test utilities for integration tests.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::cell::{Cell, RefCell};
use std::time::Duration;

use ilert_client::{ClientError, EventRequest, Result, Transport, TransportResponse};
use ilert_config::{Config, ConnectionConfig, Context, Variant};
use secrecy::SecretString;

#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Config pointing at a local mock server.
#[allow(dead_code)]
pub fn config_for(server: &MockServer, variant: Variant, context: Context) -> Config {
    Config {
        variant,
        connection: ConnectionConfig {
            endpoint: "http://127.0.0.1".to_string(),
            port: server.address().port(),
            timeout: Duration::from_secs(5),
        },
        api_key: SecretString::from("test-api-key".to_string()),
        context,
    }
}

#[allow(dead_code)]
pub fn sample_context() -> Context {
    [
        ("PLUGIN_VERSION", "1.0"),
        ("NOTIFY_HOSTNAME", "web01"),
        ("NOTIFY_WHAT", "SERVICE"),
    ]
    .into_iter()
    .collect()
}

/// Transport that records every request and replies with a canned result.
#[allow(dead_code)]
pub struct StubTransport {
    reply: RefCell<Option<Result<TransportResponse>>>,
    calls: Cell<usize>,
    pub last_request: RefCell<Option<EventRequest>>,
}

#[allow(dead_code)]
impl StubTransport {
    pub fn responding(status: u16, body: &str) -> Self {
        Self::with_reply(Ok(TransportResponse {
            status,
            reason: String::new(),
            body: body.to_string(),
        }))
    }

    pub fn failing(error: ClientError) -> Self {
        Self::with_reply(Err(error))
    }

    fn with_reply(reply: Result<TransportResponse>) -> Self {
        Self {
            reply: RefCell::new(Some(reply)),
            calls: Cell::new(0),
            last_request: RefCell::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Transport for StubTransport {
    async fn post(&self, request: EventRequest) -> Result<TransportResponse> {
        self.calls.set(self.calls.get() + 1);
        *self.last_request.borrow_mut() = Some(request);
        self.reply
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Err(ClientError::RequestFailed("stub already used".to_string())))
    }
}
