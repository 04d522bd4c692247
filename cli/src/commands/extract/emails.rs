//! # Email Extraction
//!
//! File: cli/src/commands/extract/emails.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Finds email-like substrings with one deliberately permissive pattern:
//!
//! ```text
//! [A-Za-z0-9._%+-]+ @ [A-Za-z0-9.-]+ \. [A-Za-z]{2,}
//! ```
//!
//! Matches are non-overlapping, reported left to right, and kept verbatim:
//! no deduplication and no further validation. This is not an RFC 5322
//! parser and is not meant to be one.
//!
use crate::common::fs::io;
use crate::core::error::Result;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
        .expect("email pattern is a valid regex")
});

/// All email-like matches in `text`, in order of appearance.
pub fn find_emails(text: &str) -> Vec<&str> {
    EMAIL_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Reads `source`, writes every match to `dest` (one per line, truncating
/// `dest`), and returns the number written.
///
/// # Errors
///
/// Fails if `source` cannot be read or `dest` cannot be written. Nothing is
/// retried.
pub fn extract_emails(source: &Path, dest: &Path) -> Result<usize> {
    let text = io::read_file_to_string(source)?;
    let emails = find_emails(&text);
    debug!("Found {} email matches in {:?}", emails.len(), source);
    let written = io::write_lines_to_file(dest, &emails)?;
    info!("Saved {} emails from {:?} to {:?}", written, source, dest);
    Ok(written)
}
