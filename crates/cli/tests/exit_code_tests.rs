//! Integration tests for plugin exit codes and outcome log lines.
//!
//! CheckMK retries a notification when the plugin exits non-zero, so these
//! pin down which responses count as handled.

mod common;

use common::{closed_port, count_level, plugin_cmd, plugin_cmd_for};
use predicates::prelude::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 200 logs exactly two INFO lines and exits 0.
#[tokio::test]
async fn test_delivered_returns_exit_code_0() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/events/checkmk-ext/test-key"))
        .and(header("Agent", "checkmk/extension/1.0"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let output = plugin_cmd_for("ilert-checkmk", &server)
        .args(["--apikey", "test-key"])
        .env("NOTIFY_HOSTNAME", "web01")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Sending event to iLert..."))
        .stdout(predicate::str::contains("Event has been sent to iLert"))
        .get_output()
        .clone();

    assert_eq!(count_level(&output.stdout, "INFO"), 2);
}

/// 404 is a permanent rejection: warn, exit 0.
#[tokio::test]
async fn test_rejected_returns_exit_code_0() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_string("alert source not found"))
        .expect(1)
        .mount(&server)
        .await;

    plugin_cmd_for("ilert-checkmk", &server)
        .args(["-a", "test-key"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "WARN event not accepted by iLert. Reason: alert source not found",
        ));
}

/// 429 asks CheckMK to retry: warn, exit 1.
#[tokio::test]
async fn test_rate_limited_returns_exit_code_1() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .expect(1)
        .mount(&server)
        .await;

    plugin_cmd_for("ilert-checkmk", &server)
        .args(["-a", "test-key"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "WARN too many requests, will try later. Server response: quota exceeded",
        ));
}

/// 500 is an error: exit 1 with code, reason and body.
#[tokio::test]
async fn test_server_error_returns_exit_code_1() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    plugin_cmd_for("ilert-checkmk", &server)
        .args(["-a", "test-key"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "ERROR could not send event to iLert. HTTP error code 500, reason: Internal Server Error, boom",
        ));
}

/// No API key anywhere: exit 1 without touching the network.
#[tokio::test]
async fn test_missing_api_key_returns_exit_code_1() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    plugin_cmd_for("ilert-checkmk", &server)
        .arg("foo=bar")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("parameter apikey is required"))
        .stdout(predicate::str::contains("NOTIFY_PARAMETER_ILERT_API_KEY"))
        .stdout(predicate::str::contains("Sending event to iLert...").not());
}

/// Connection refused: exit 1 with the transport reason.
#[test]
fn test_connection_refused_returns_exit_code_1() {
    plugin_cmd("ilert-checkmk")
        .args(["-a", "test-key", "-e", "http://127.0.0.1", "-p"])
        .arg(closed_port().to_string())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "ERROR could not send event to iLert. Reason: Connection failed",
        ))
        .stdout(predicate::str::contains("test-key").not());
}

/// An endpoint with a path is a configuration error.
#[test]
fn test_invalid_endpoint_returns_exit_code_1() {
    plugin_cmd("ilert-checkmk")
        .args(["-a", "test-key", "-e", "https://api.ilert.com/api"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid value for endpoint"));
}

#[test]
fn test_version_flag_prints_bare_version() {
    for bin in ["ilert-checkmk", "ilert-checkmk-native", "ilert-checkmk-pager"] {
        plugin_cmd(bin).arg("--version").assert().code(0).stdout("1.0\n");
    }
}

#[test]
fn test_non_numeric_port_is_usage_error() {
    plugin_cmd("ilert-checkmk")
        .args(["-a", "test-key", "-p", "not-a-port"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not-a-port"));
}
