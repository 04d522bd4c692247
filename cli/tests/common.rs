//! # CodeAlpha Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests. Each other `.rs` file in
//! `cli/tests/` is its own test crate and pulls this in with `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;

/// # Get Chatbot Command (`chatbot_cmd`)
///
/// An `assert_cmd::Command` for the compiled `chatbot` binary, with the
/// typing effect off and a fixed seed so runs are fast and reproducible.
///
/// ## Panics
/// Panics if the `chatbot` binary cannot be found.
pub fn chatbot_cmd() -> Command {
    let mut cmd = Command::cargo_bin("chatbot").expect("Failed to find chatbot binary for testing");
    cmd.args(["--no-typing", "--seed", "7"]);
    cmd
}

/// # Get Extractor Command (`extract_cmd`)
///
/// An `assert_cmd::Command` for the compiled `extract-emails` binary.
///
/// ## Panics
/// Panics if the `extract-emails` binary cannot be found.
pub fn extract_cmd() -> Command {
    Command::cargo_bin("extract-emails").expect("Failed to find extract-emails binary for testing")
}
