//! # CodeAlpha Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Foundational pieces used by both commands:
//! - `config`: the chatbot's category table (loading, validation)
//! - `error`: `AlphaError` and the crate-wide `Result` alias
//! - `logging`: the `tracing` subscriber setup shared by both binaries
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::core::config; // Category table
//! use crate::core::error::{AlphaError, Result}; // Error handling
//! ```
//!
pub mod config;
pub mod error;
pub mod logging;
