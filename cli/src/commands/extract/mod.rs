//! # CodeAlpha Email Extractor Command
//!
//! File: cli/src/commands/extract/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Reads one text file, collects every email-like substring and writes them,
//! one per line, to an output file. By default it reads `data.txt` and writes
//! `emails.txt` in the current directory.
//!
//! ## Examples
//!
//! ```bash
//! # data.txt -> emails.txt
//! extract-emails
//!
//! # Custom paths
//! extract-emails --input inbox.txt --output found.txt
//! ```
//!
use crate::core::error::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

pub mod emails;

pub use emails::{extract_emails, find_emails};

/// Default source file, relative to the working directory.
pub const DEFAULT_INPUT: &str = "data.txt";
/// Default destination file, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "emails.txt";

/// # Extractor Arguments (`ExtractArgs`)
#[derive(Parser, Debug)]
#[command(
    name = "extract-emails",
    about = "📧 Extract email addresses from a text file",
    version
)]
pub struct ExtractArgs {
    /// Text file to scan.
    #[arg(long, short, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// File to write the addresses to (overwritten).
    #[arg(long, short, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Increase log verbosity (-v, -vv, -vvv). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// # Handle Extract Command (`handle_extract`)
///
/// Runs the extraction and prints the completion message. Returns the number
/// of addresses written.
///
/// ## Errors
///
/// Fails if the input cannot be read or the output cannot be written.
pub fn handle_extract(args: ExtractArgs) -> Result<usize> {
    info!("Handling extract command with args: {:?}", args);

    let count = extract_emails(&args.input, &args.output)?;
    println!("Task completed! Emails saved to {}", args.output.display());
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let args = ExtractArgs::parse_from(["extract-emails"]);
        assert_eq!(args.input, PathBuf::from("data.txt"));
        assert_eq!(args.output, PathBuf::from("emails.txt"));
        assert_eq!(args.verbose, 0);
    }

    #[test]
    fn test_custom_paths() {
        let args = ExtractArgs::parse_from(["extract-emails", "-i", "in.txt", "--output", "out.txt"]);
        assert_eq!(args.input, PathBuf::from("in.txt"));
        assert_eq!(args.output, PathBuf::from("out.txt"));
    }
}
