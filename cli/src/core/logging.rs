//! # CodeAlpha Logging Setup
//!
//! File: cli/src/core/logging.rs
//! Author: Christi Mahu
//!
//! Configures the global `tracing` subscriber. Logs always go to stderr so
//! stdout carries only what the user is meant to read.
//!
use tracing_subscriber::{fmt, EnvFilter};

/// Maps a `-v` count to a default filter directive.
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the subscriber. `RUST_LOG`, when set, overrides `verbose`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init(verbose: u8) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbose)));
    let _ = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
