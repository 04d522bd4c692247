//! # CodeAlpha Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Filesystem helpers shared by the binaries. Callers import the submodule
//! directly, e.g. `crate::common::fs::io::read_file_to_string`.
//!

/// Whole-file reads and line-oriented writes (`read_file_to_string`, `write_lines_to_file`).
pub mod io;
