//! # CodeAlpha Tools
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Library behind two small command-line programs:
//! - `chatbot`: a keyword-matching conversational responder
//! - `extract-emails`: pulls email addresses out of a text file
//!
//! The library layout follows the usual split:
//! - `commands`: one module per program (arguments + handler)
//! - `common`: domain-free helpers (filesystem, terminal output)
//! - `core`: errors, configuration, logging
//!
//! Exposing this as a library lets the integration tests in `tests/` and
//! both binaries share one implementation.
//!
pub mod commands;
pub mod common;
pub mod core;
