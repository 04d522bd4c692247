//! # CodeAlpha Category Table Configuration
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads and validates the chatbot's category table: the ordered
//! list of named categories, each with trigger patterns and candidate replies.
//! The table is built once at startup and never mutated afterwards.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. A TOML file passed with `chatbot --categories <FILE>` (`~` is expanded)
//! 2. The built-in table embedded from `categories.toml`
//!
//! Whatever the source, the raw TOML goes through the same steps:
//! - Deserialize into `CategoryTable` (unknown fields are rejected)
//! - Normalize patterns to trimmed lowercase
//! - Validate the table invariants (see `validate_table`)
//!
//! ## Examples
//!
//! ```toml
//! bot_name = "Helper"
//!
//! [[category]]
//! name = "greetings"
//! patterns = ["hello", "hi"]
//! replies = ["Hello from {bot_name}!"]
//!
//! [[category]]
//! name = "default"
//! patterns = []
//! replies = ["Say that again?"]
//! ```
//!
use crate::core::error::{AlphaError, Result};
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// The category every table must contain; it has no patterns and catches
/// everything the others miss.
pub const DEFAULT_CATEGORY: &str = "default";

/// Placeholder in reply templates replaced by the table's `bot_name`.
pub const BOT_NAME_PLACEHOLDER: &str = "{bot_name}";

const BUILTIN_TABLE: &str = include_str!("categories.toml");

fn default_bot_name() -> String {
    "CodeAlpha Assistant".to_string()
}

/// The complete, ordered category table.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CategoryTable {
    /// Name the bot introduces itself with.
    #[serde(default = "default_bot_name")]
    pub bot_name: String,
    /// Categories in declaration order. Scanning order is this order.
    #[serde(rename = "category", default)]
    pub categories: Vec<Category>,
}

/// A named group of trigger patterns and candidate replies.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Category {
    pub name: String,
    /// Lowercase substrings; empty only for the `default` category.
    #[serde(default)]
    pub patterns: Vec<String>,
    pub replies: Vec<String>,
}

impl Category {
    /// True when any pattern occurs in `normalized` (already lowercased input).
    pub fn matches(&self, normalized: &str) -> bool {
        self.patterns.iter().any(|p| normalized.contains(p.as_str()))
    }

    pub fn is_fallback(&self) -> bool {
        self.name == DEFAULT_CATEGORY
    }
}

impl CategoryTable {
    /// Looks a category up by name.
    ///
    /// # Returns
    ///
    /// * `Option<&Category>` - The category, or `None` if no category has that name.
    ///
    /// # Examples
    ///
    /// ```
    /// use codealpha::core::config::builtin_table;
    ///
    /// let table = builtin_table()?;
    /// let thanks = table.get("thanks").expect("built-in table has 'thanks'");
    /// assert!(thanks.matches("thank you so much"));
    /// assert!(table.get("weather").is_none());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// The fallback category. Present in every validated table.
    pub fn fallback(&self) -> Option<&Category> {
        self.get(DEFAULT_CATEGORY)
    }

    /// Replaces the bot name placeholder in a reply template.
    pub fn render(&self, template: &str) -> String {
        template.replace(BOT_NAME_PLACEHOLDER, &self.bot_name)
    }
}

/// Loads the built-in table.
pub fn builtin_table() -> Result<CategoryTable> {
    parse_table(BUILTIN_TABLE).context("Built-in category table is invalid")
}

/// # Load Category Table (`load_table`)
///
/// Loads the table from `path` when given, otherwise the built-in one. A
/// leading `~` in `path` is expanded to the home directory; the rest of the
/// path is used as-is, non-UTF-8 bytes included.
///
/// # Arguments
///
/// * `path` - Optional TOML file, as passed with `chatbot --categories`.
///
/// # Returns
///
/// * `Result<CategoryTable>` - A normalized, validated table.
///
/// # Errors
///
/// Returns an `Err` if the file cannot be read, is not valid TOML for a
/// category table, or breaks a table invariant (`AlphaError::Config`).
pub fn load_table(path: Option<&Path>) -> Result<CategoryTable> {
    let table = match path {
        Some(path) => {
            let expanded = shellexpand::path::tilde(path);
            let expanded: &Path = &expanded;
            info!("Loading category table from: {}", expanded.display());
            let content = crate::common::fs::io::read_file_to_string(expanded)?;
            parse_table(&content).with_context(|| {
                format!("Invalid category table in file: {}", expanded.display())
            })?
        }
        None => {
            debug!("Using built-in category table");
            builtin_table()?
        }
    };
    debug!(
        "Category table ready: {} categories, bot name '{}'",
        table.categories.len(),
        table.bot_name
    );
    Ok(table)
}

/// Parses, normalizes and validates a table from TOML text.
///
/// # Errors
///
/// Returns an `Err` on malformed TOML or unknown fields, and an
/// `AlphaError::Config` when the table breaks an invariant (see
/// `validate_table`).
pub fn parse_table(content: &str) -> Result<CategoryTable> {
    let mut table: CategoryTable =
        toml::from_str(content).context("Failed to parse category table TOML")?;
    normalize_patterns(&mut table);
    validate_table(&table)?;
    Ok(table)
}

fn normalize_patterns(table: &mut CategoryTable) {
    for category in &mut table.categories {
        for pattern in &mut category.patterns {
            *pattern = pattern.trim().to_lowercase();
        }
    }
}

/// Checks the invariants the responder relies on:
/// unique names, non-empty replies, no blank patterns, and exactly one
/// pattern-less category which must be `default`.
fn validate_table(table: &CategoryTable) -> Result<()> {
    if table.categories.is_empty() {
        anyhow::bail!(AlphaError::Config("category table is empty".into()));
    }

    let mut seen = HashSet::new();
    for category in &table.categories {
        if !seen.insert(category.name.as_str()) {
            anyhow::bail!(AlphaError::Config(format!(
                "duplicate category '{}'",
                category.name
            )));
        }
        if category.replies.is_empty() {
            anyhow::bail!(AlphaError::Config(format!(
                "category '{}' has no replies",
                category.name
            )));
        }
        if category.patterns.iter().any(String::is_empty) {
            anyhow::bail!(AlphaError::Config(format!(
                "category '{}' has a blank pattern",
                category.name
            )));
        }
        if category.patterns.is_empty() && !category.is_fallback() {
            anyhow::bail!(AlphaError::Config(format!(
                "category '{}' has no patterns; only '{}' may be empty",
                category.name, DEFAULT_CATEGORY
            )));
        }
        if !category.patterns.is_empty() && category.is_fallback() {
            anyhow::bail!(AlphaError::Config(format!(
                "category '{}' must not have patterns",
                DEFAULT_CATEGORY
            )));
        }
    }

    if table.fallback().is_none() {
        anyhow::bail!(AlphaError::Config(format!(
            "missing '{}' category",
            DEFAULT_CATEGORY
        )));
    }
    Ok(())
}
