//! # Chatrs CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`chat.rs`, `patterns.rs`,
//! `main_tests.rs`). Each of those files is compiled as a separate test crate
//! that runs the compiled `chatrs` binary.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;

/// # Get Chatrs Command (`chatrs_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `chatrs` binary, with
/// `RUST_LOG` cleared so log output never depends on the caller's environment.
///
/// ## Panics
/// Panics if the `chatrs` binary cannot be found via `Command::cargo_bin`.
pub fn chatrs_cmd() -> Command {
    let mut cmd = Command::cargo_bin("chatrs").expect("Failed to find chatrs binary for testing");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Writes `content` to a `chatrs.toml` inside a fresh temporary directory.
///
/// The directory is returned so it lives as long as the test needs the file.
pub fn write_config(content: &str) -> (tempfile::TempDir, String) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir for config");
    let path = dir.path().join("chatrs.toml");
    std::fs::write(&path, content).expect("Failed to write config file");
    let path = path.to_str().expect("utf-8 temp path").to_string();
    (dir, path)
}
