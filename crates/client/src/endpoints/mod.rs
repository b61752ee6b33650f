//! iLert events endpoint.
//!
//! # What this module handles:
//! - Composing `{endpoint}:{port}/api/v1/events/{channel}/{api_key}`
//! - A redacted form of the same URL for logs
//!
//! # What this module does NOT handle:
//! - Endpoint validation (done when the configuration is built)
//! - Sending requests (see [`crate::transport`])

pub mod url_encoding;

use ilert_config::Channel;
use ilert_config::constants::EVENTS_PATH;

use self::url_encoding::encode_path_segment;

const REDACTED: &str = "***";

/// Build the events URL for one alert source.
///
/// # Example
/// ```
/// use ilert_client::endpoints::event_url;
/// use ilert_config::Channel;
///
/// let url = event_url("https://api.ilert.com", 443, Channel::CheckmkExt, "il1api123");
/// assert_eq!(url, "https://api.ilert.com:443/api/v1/events/checkmk-ext/il1api123");
/// ```
pub fn event_url(endpoint: &str, port: u16, channel: Channel, api_key: &str) -> String {
    format!(
        "{endpoint}:{port}{EVENTS_PATH}/{channel}/{}",
        encode_path_segment(api_key)
    )
}

/// The events URL with the API key replaced by `***`.
pub fn redacted_event_url(endpoint: &str, port: u16, channel: Channel) -> String {
    format!("{endpoint}:{port}{EVENTS_PATH}/{channel}/{REDACTED}")
}
