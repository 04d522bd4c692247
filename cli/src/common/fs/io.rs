//! # CodeAlpha Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` that attach the offending path to every
//! error via `anyhow::Context`:
//! - **`read_file_to_string`**: reads a whole file as UTF-8 text.
//! - **`write_lines_to_file`**: creates (or truncates) a file and writes each
//!   line followed by `\n`.
//!
//! Neither function retries or creates missing parent directories; a bad path
//! is reported to the caller as-is.
//!
use crate::core::error::{AlphaError, Result};
use anyhow::Context;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

/// Reads the entire content of a file into a string.
///
/// # Errors
///
/// Returns an `Err` if the path is a directory, or the file cannot be found,
/// opened, or decoded as UTF-8.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    if path.is_dir() {
        anyhow::bail!(AlphaError::FileSystem(format!(
            "Expected a file but found a directory: {}",
            path.display()
        )));
    }
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))?;
    debug!("Read {} bytes from {:?}", content.len(), path);
    Ok(content)
}

/// Writes `lines` to `path`, one per line, replacing any existing content.
///
/// Returns the number of lines written. An empty slice still creates (or
/// truncates) the file.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be created or a write fails. The file
/// content is unspecified after a failed write.
pub fn write_lines_to_file<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<usize> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create file {:?}", path))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref())
            .with_context(|| format!("Failed to write to file {:?}", path))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote {} lines to file: {:?}", lines.len(), path);
    Ok(lines.len())
}
