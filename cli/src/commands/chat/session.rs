//! # Chat Session State
//!
//! File: cli/src/commands/chat/session.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A `Session` owns everything that changes during one run of the chatbot:
//! the user's name (once they tell us) and the transcript of every turn.
//! It lives exactly as long as the chat loop and is never persisted.
//!
use chrono::{DateTime, Local};
use std::fmt;

/// Who said a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => write!(f, "User"),
            Speaker::Bot => write!(f, "Bot"),
        }
    }
}

/// One transcript line.
#[derive(Debug, Clone)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
    pub at: DateTime<Local>,
}

impl fmt::Display for TranscriptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.at.format("%H:%M:%S"),
            self.speaker,
            self.text
        )
    }
}

/// Mutable per-session state handed to every turn.
#[derive(Debug, Default)]
pub struct Session {
    known_user_name: Option<String>,
    transcript: Vec<TranscriptEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_name(&self) -> Option<&str> {
        self.known_user_name.as_deref()
    }

    pub fn set_user_name(&mut self, name: String) {
        self.known_user_name = Some(name);
    }

    /// Appends a line to the transcript. The transcript only ever grows.
    pub fn record(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.transcript.push(TranscriptEntry {
            speaker,
            text: text.into(),
            at: Local::now(),
        });
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// Number of user/bot message pairs exchanged so far.
    pub fn exchanged_pairs(&self) -> usize {
        self.transcript.len() / 2
    }
}
