//! Shared helpers for integration tests.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// An isolated config directory for one test.
pub fn config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp config dir")
}

/// Build a `hexgrad` command with colors off and config isolated to `dir`.
pub fn hexgrad(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_hexgrad"));
    cmd.env("NO_COLOR", "1").env("HEXGRAD_CONFIG_DIR", dir);
    cmd
}

/// Run hexgrad and capture (stdout, stderr, exit code).
pub fn run(dir: &Path, args: &[&str]) -> (String, String, i32) {
    let output = hexgrad(dir)
        .args(args)
        .output()
        .expect("Failed to execute hexgrad");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
