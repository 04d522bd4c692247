//! # CodeAlpha UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Terminal presentation helpers. Purely cosmetic: nothing here changes
//! program state.
//!
//! - **`typewriter`**: prints text one character at a time with a delay, the
//!   "bot is typing" effect used for chatbot replies.
//!

/// Character-by-character output with a fixed delay.
pub mod typewriter;
