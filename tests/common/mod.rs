//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

/// A `numword` command isolated from the user's config file.
///
/// `NUMWORD_CONFIG` points into `home`, where no file exists unless a test
/// writes one with [`write_config`].
pub fn numword(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("numword").unwrap();
    cmd.env("NUMWORD_CONFIG", config_file(home.path()))
        .env_remove("RUST_LOG");
    cmd
}

pub fn config_file(dir: &Path) -> std::path::PathBuf {
    dir.join("config.toml")
}

pub fn write_config(home: &TempDir, content: &str) {
    std::fs::write(config_file(home.path()), content).unwrap();
}
