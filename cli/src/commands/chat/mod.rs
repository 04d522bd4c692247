//! # CodeAlpha Chatbot Command
//!
//! File: cli/src/commands/chat/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A rule-based conversational responder. Each input line is matched against
//! a fixed, ordered table of categories (keyword patterns plus canned
//! replies) and answered with a random reply from the first category that
//! matches. The session remembers the user's name and keeps a transcript
//! until the process exits.
//!
//! ## Architecture
//!
//! - `session.rs`: per-session state (user name, transcript)
//! - `responder.rs`: the matching rules behind `respond`
//! - `repl.rs`: the stdin/stdout loop, session commands and Ctrl+C handling
//!
//! ## Examples
//!
//! ```bash
//! # Start chatting with the built-in table
//! chatbot
//!
//! # Reproducible replies, no typing effect, custom table
//! chatbot --seed 7 --no-typing --categories ~/my-bot.toml
//! ```
//!
use crate::common::ui::typewriter;
use crate::core::config;
use crate::core::error::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

pub mod repl;
pub mod responder;
pub mod session;

pub use repl::ChatLoop;
pub use responder::Responder;
pub use session::Session;

/// # Chatbot Arguments (`ChatArgs`)
///
/// All flags are optional; with none given the chatbot uses the built-in
/// category table, an entropy-seeded generator and the typing effect.
#[derive(Parser, Debug)]
#[command(
    name = "chatbot",
    about = "🤖 A rule-based chatbot for the CodeAlpha internship",
    version
)]
pub struct ChatArgs {
    /// Seed for reply selection. Same seed, same conversation.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print replies at once instead of character by character.
    #[arg(long)]
    pub no_typing: bool,

    /// TOML category table to use instead of the built-in one.
    #[arg(long, value_name = "FILE")]
    pub categories: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Loads the category table, builds the responder and runs the session loop
/// on stdin/stdout until the user leaves.
///
/// ## Errors
///
/// Returns an error if the category table cannot be loaded or validated, or
/// if the session loop gives up after repeated failed turns.
pub fn handle_chat(args: ChatArgs) -> Result<()> {
    info!("Handling chat command with args: {:?}", args);

    let table = config::load_table(args.categories.as_deref())?;
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let responder = Responder::new(table, rng);

    if let Err(e) = repl::install_interrupt_reminder(responder.bot_name()) {
        warn!("{:#}", e);
    }

    let typing_delay = if args.no_typing {
        Duration::ZERO
    } else {
        typewriter::DEFAULT_DELAY
    };

    let stdin = io::stdin();
    let mut chat = ChatLoop::new(responder, stdin.lock(), io::stdout(), typing_delay);
    chat.run()
}
