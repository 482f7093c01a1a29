//! Shared test utilities for groups-cli integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - `GROUPS_API_KEY` is set to "test-key" unless overridden.

use assert_cmd::Command;

/// Returns a hermetic `groups` command for integration testing.
///
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `GROUPS_API_KEY` is set to a dummy value.
/// - `GROUPS_BASE_URL` is cleared to avoid leakage from the host.
pub fn groups_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("groups");
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("GROUPS_API_KEY", "test-key");
    cmd.env_remove("GROUPS_BASE_URL");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Returns a hermetic `groups` command pointed at a mock server.
#[allow(dead_code)]
pub fn groups_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = groups_cmd();
    cmd.env("GROUPS_BASE_URL", base_url);
    cmd
}
