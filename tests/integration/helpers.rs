//! Shared helpers for integration tests

use std::path::PathBuf;
use std::process::Command;

/// Config directory that never contains a config file.
pub fn empty_config_home() -> PathBuf {
    PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("seekctl-empty-config")
}

/// Run the seekctl binary and capture (stdout, stderr, exit code).
pub fn run_seekctl(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_seekctl"))
        .args(args)
        .env("XDG_CONFIG_HOME", empty_config_home())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute seekctl");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
