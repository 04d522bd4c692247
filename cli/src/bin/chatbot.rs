//! # CodeAlpha Chatbot Entry Point
//!
//! File: cli/src/bin/chatbot.rs
//! Author: Christi Mahu
//!
//! Parses arguments, sets up logging and hands off to
//! `commands::chat::handle_chat`. Exits 0 when the user leaves the chat.
//!
use clap::Parser;
use codealpha::commands::chat::{self, ChatArgs};
use codealpha::core::logging;

fn main() -> anyhow::Result<()> {
    let args = ChatArgs::parse();
    logging::init(args.verbose);

    tracing::debug!("Parsed CLI arguments: {:?}", args);

    if let Err(e) = chat::handle_chat(args) {
        tracing::error!("Chat session failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
