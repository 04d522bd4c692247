//! # CodeAlpha Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! One module per binary. Each defines its clap argument struct and a
//! `handle_*` entry point that the binary's `main` calls after logging is set
//! up. The two commands share no domain logic.
//!

/// The rule-based chatbot (`chatbot` binary).
pub mod chat;
/// The email extractor (`extract-emails` binary).
pub mod extract;
