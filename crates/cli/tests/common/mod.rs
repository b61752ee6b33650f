//! Shared test utilities for plugin integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic command factory for each plugin binary.
//!
//! Invariants / Assumptions:
//! - No `.env` file is loaded and no `NOTIFY_*` variable leaks in from the host.
//! - Log filter is pinned to `info`.

use assert_cmd::Command;
use wiremock::MockServer;

/// Returns a hermetic command for the named plugin binary.
pub fn plugin_cmd(bin: &str) -> Command {
    let mut cmd = match bin {
        "ilert-checkmk" => assert_cmd::cargo::cargo_bin_cmd!("ilert-checkmk"),
        "ilert-checkmk-native" => assert_cmd::cargo::cargo_bin_cmd!("ilert-checkmk-native"),
        "ilert-checkmk-pager" => assert_cmd::cargo::cargo_bin_cmd!("ilert-checkmk-pager"),
        other => panic!("unknown plugin binary: {other}"),
    };

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("RUST_LOG", "info");

    cmd.env_remove("ILERT_ENDPOINT").env_remove("ILERT_PORT");
    for (key, _) in std::env::vars_os() {
        if key.to_string_lossy().contains("NOTIFY_") {
            cmd.env_remove(key);
        }
    }

    cmd
}

/// Returns a hermetic command pointed at a mock server.
#[allow(dead_code)]
pub fn plugin_cmd_for(bin: &str, server: &MockServer) -> Command {
    let mut cmd = plugin_cmd(bin);
    cmd.env("ILERT_ENDPOINT", "http://127.0.0.1");
    cmd.env("ILERT_PORT", server.address().port().to_string());
    cmd
}

/// Count log lines at the given level in captured stdout.
#[allow(dead_code)]
pub fn count_level(stdout: &[u8], level: &str) -> usize {
    String::from_utf8_lossy(stdout)
        .lines()
        .filter(|line| line.split_whitespace().nth(1) == Some(level))
        .count()
}

/// A port with nothing listening on it.
#[allow(dead_code)]
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    port
}
