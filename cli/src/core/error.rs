//! # CodeAlpha Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types shared by the `chatbot` and
//! `extract-emails` binaries.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `AlphaError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover:
//! - Category table (configuration) errors
//! - Filesystem errors
//! - Interactive input errors
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error type
//! if table.categories.is_empty() {
//!     anyhow::bail!(AlphaError::Config("category table is empty".into()));
//! }
//!
//! // Add context to errors using anyhow
//! let text = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the CodeAlpha tools.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AlphaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Input error: {0}")]
    Input(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = AlphaError::Config("duplicate category 'help'".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: duplicate category 'help'"
        );

        let fs_err = AlphaError::FileSystem("data.txt is a directory".into());
        assert_eq!(fs_err.to_string(), "Filesystem error: data.txt is a directory");

        let input_err = AlphaError::Input("stream closed".into());
        assert_eq!(input_err.to_string(), "Input error: stream closed");
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = AlphaError::Config("no default".into()).into();
        assert_eq!(
            err.downcast_ref::<AlphaError>(),
            Some(&AlphaError::Config("no default".into()))
        );
    }
}
