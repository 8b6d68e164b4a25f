//! Shared test utilities for integration tests.
#![allow(dead_code)]

use std::path::PathBuf;

use tempfile::TempDir;

/// Write `contents` to `config.toml` in a fresh temp dir.
/// Returns the TempDir (must be held alive for the duration of the test) and the file path.
pub fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, contents).expect("failed to write config");
    (dir, path)
}
