//! Shared test utilities for mlpath integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Point every command at a per-test state directory.
//!
//! Invariants / Assumptions:
//! - Tests never read or write the host's real onboarding state.

use std::path::Path;

use assert_cmd::Command;

/// Returns a hermetic `mlpath` command whose state lives in `state_dir`.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `MLPATH_STATE_DIR` points at `state_dir`.
/// - `MLPATH_STATE_KEY` from the host is cleared.
pub fn mlpath_cmd(state_dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("mlpath");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("MLPATH_STATE_DIR", state_dir);
    cmd.env_remove("MLPATH_STATE_KEY").env_remove("RUST_LOG");

    cmd
}

/// Runs `status --output json` and returns the parsed document.
#[allow(dead_code)]
pub fn status_json(state_dir: &Path) -> serde_json::Value {
    let output = mlpath_cmd(state_dir)
        .args(["status", "--output", "json"])
        .output()
        .expect("mlpath should run");
    assert!(output.status.success(), "status failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("status output should be JSON")
}
