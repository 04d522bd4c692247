//! # CodeAlpha Email Extractor Entry Point
//!
//! File: cli/src/bin/extract_emails.rs
//! Author: Christi Mahu
//!
//! Parses arguments, sets up logging and runs
//! `commands::extract::handle_extract`. Any I/O failure is fatal: the error
//! is printed to stderr and the process exits with status 1.
//!
use clap::Parser;
use codealpha::commands::extract::{self, ExtractArgs};
use codealpha::core::logging;

fn main() -> anyhow::Result<()> {
    let args = ExtractArgs::parse();
    logging::init(args.verbose);

    tracing::debug!("Parsed CLI arguments: {:?}", args);

    match extract::handle_extract(args) {
        Ok(count) => tracing::info!("Extracted {} email addresses", count),
        Err(e) => {
            tracing::error!("Extraction failed: {:?}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
