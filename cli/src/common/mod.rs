//! # CodeAlpha Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared, domain-free helpers used by the command modules:
//!
//! - **`fs`**: reading source files and writing line-oriented output files.
//! - **`ui`**: terminal presentation (the typewriter effect).
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::common::{fs::io, ui::typewriter};
//!
//! let text = io::read_file_to_string(Path::new("data.txt"))?;
//! typewriter::type_out(&mut std::io::stdout(), &text, typewriter::DEFAULT_DELAY)?;
//! ```
//!

/// Utilities for filesystem operations.
pub mod fs;
/// Utilities for terminal output.
pub mod ui;
