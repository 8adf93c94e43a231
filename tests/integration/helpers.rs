//! Shared helpers for integration tests

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Write `contents` to a config file inside a fresh temp directory.
///
/// The directory is removed when the returned `TempDir` is dropped.
pub fn temp_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("Failed to write config");
    (dir, path)
}

/// Build a colorstr command isolated from the user's environment.
///
/// Points `--config` at an empty file and clears `NO_COLOR`.
pub fn colorstr_command(config: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_colorstr"));
    cmd.env_remove("NO_COLOR").arg("--config").arg(config);
    cmd
}

/// Run colorstr and capture output
pub fn run_colorstr(args: &[&str]) -> (String, String, i32) {
    let (_dir, config) = temp_config("");
    let output = colorstr_command(&config)
        .args(args)
        .output()
        .expect("Failed to execute colorstr");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
