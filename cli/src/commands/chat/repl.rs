//! # Chat Session Loop
//!
//! File: cli/src/commands/chat/repl.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Drives one chat session: prompt, read a line, act on it, repeat. The loop
//! is generic over its input (`BufRead`) and output (`Write`) so tests can
//! feed it scripted lines and inspect what it printed.
//!
//! ## Session Commands
//!
//! Matched case-insensitively against the whole trimmed line, before any
//! category matching:
//! - `history`: print the numbered transcript
//! - `menu`: print the help text again
//! - `exit` / `quit`: say goodbye, print a summary and stop
//!
//! Closing the input stream ends the session the same way as `exit`.
//!
//! ## Error Handling
//!
//! A failed turn is reported in-band and the loop keeps going. After
//! `MAX_CONSECUTIVE_FAILURES` failed turns in a row the loop gives up and
//! returns the error. Ctrl+C never reaches the loop: the handler installed by
//! `install_interrupt_reminder` prints a reminder instead of terminating.
//!
use crate::commands::chat::responder::{Responder, FAREWELL};
use crate::commands::chat::session::Session;
use crate::common::ui::typewriter;
use crate::core::error::{AlphaError, Result};
use anyhow::Context;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Failed turns in a row tolerated before the session is abandoned.
pub const MAX_CONSECUTIVE_FAILURES: usize = 5;

/// Shown when the user presses Ctrl+C.
pub const INTERRUPT_REMINDER: &str =
    "Oops! Did you mean to exit? Type 'exit' or 'quit' to leave properly.";

const RULE_WIDTH: usize = 50;

/// A line that controls the session instead of being chatted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    History,
    Menu,
    Exit,
}

impl SessionCommand {
    /// Recognizes a trimmed input line, ignoring case.
    pub fn parse(line: &str) -> Option<Self> {
        match line.to_lowercase().as_str() {
            "history" => Some(Self::History),
            "menu" => Some(Self::Menu),
            "exit" | "quit" => Some(Self::Exit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// The interactive loop around a `Responder` and its `Session`.
pub struct ChatLoop<R: Rng, I: BufRead, O: Write> {
    responder: Responder<R>,
    session: Session,
    input: I,
    output: O,
    typing_delay: Duration,
}

impl<R: Rng, I: BufRead, O: Write> ChatLoop<R, I, O> {
    pub fn new(responder: Responder<R>, input: I, output: O, typing_delay: Duration) -> Self {
        Self {
            responder,
            session: Session::new(),
            input,
            output,
            typing_delay,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consumes the loop, returning its output sink.
    pub fn into_output(self) -> O {
        self.output
    }

    /// # Run the Session (`run`)
    ///
    /// Prints the menu, then reads and answers lines until `exit`/`quit`,
    /// end of input, or too many failed turns.
    ///
    /// Every failed turn, the last one included, is reported in-band with a
    /// "Sorry, I encountered an error" line before the loop decides whether
    /// to carry on.
    ///
    /// # Returns
    ///
    /// * `Result<()>` - `Ok(())` when the user leaves or the input closes.
    ///
    /// # Errors
    ///
    /// Returns an `AlphaError::Input` (wrapping the last failure) after
    /// `MAX_CONSECUTIVE_FAILURES` failed turns in a row, or any error from
    /// writing to the output itself.
    pub fn run(&mut self) -> Result<()> {
        self.show_menu()?;

        let mut failures = 0;
        loop {
            match self.step() {
                Ok(Flow::Continue) => failures = 0,
                Ok(Flow::Exit) => return Ok(()),
                Err(e) => {
                    failures += 1;
                    warn!(
                        "Chat turn failed ({}/{}): {:#}",
                        failures, MAX_CONSECUTIVE_FAILURES, e
                    );
                    writeln!(
                        self.output,
                        "\n{}: Sorry, I encountered an error: {:#}. Let's try again!",
                        self.responder.bot_name(),
                        e
                    )?;
                    if failures >= MAX_CONSECUTIVE_FAILURES {
                        return Err(e.context(AlphaError::Input(format!(
                            "giving up after {} consecutive failed turns",
                            failures
                        ))));
                    }
                }
            }
        }
    }

    fn step(&mut self) -> Result<Flow> {
        write!(self.output, "You: ")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            debug!("Input stream closed; ending session");
            writeln!(self.output)?;
            self.say_goodbye()?;
            return Ok(Flow::Exit);
        }

        let line = line.trim();
        match SessionCommand::parse(line) {
            Some(SessionCommand::History) => self.show_history()?,
            Some(SessionCommand::Menu) => self.show_menu()?,
            Some(SessionCommand::Exit) => {
                self.say_goodbye()?;
                return Ok(Flow::Exit);
            }
            None => {
                let reply = self.responder.respond(&mut self.session, line);
                write!(self.output, "\n{}: ", self.responder.bot_name())?;
                typewriter::type_out(&mut self.output, &reply, self.typing_delay)?;
                writeln!(self.output, "\n")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn say_goodbye(&mut self) -> Result<()> {
        let farewell = self
            .responder
            .reply_from(FAREWELL)
            .unwrap_or_else(|| "Goodbye!".to_string());
        writeln!(self.output, "\n{}: {}", self.responder.bot_name(), farewell)?;
        writeln!(
            self.output,
            "\n💬 We exchanged {} messages.",
            self.session.exchanged_pairs()
        )?;
        if let Some(name) = self.session.user_name() {
            writeln!(self.output, "👋 Goodbye, {}! Come back anytime!", name)?;
        }
        info!(
            "Chat session ended after {} exchanges",
            self.session.exchanged_pairs()
        );
        Ok(())
    }

    fn show_menu(&mut self) -> io::Result<()> {
        let rule = "=".repeat(RULE_WIDTH);
        let out = &mut self.output;
        writeln!(out, "\n{rule}")?;
        writeln!(out, "🤖 Welcome to {}!", self.responder.bot_name())?;
        writeln!(out, "{rule}")?;
        writeln!(out, "I can respond to:")?;
        writeln!(out, "• Greetings (hello, hi, hey)")?;
        writeln!(out, "• How are you")?;
        writeln!(out, "• Farewells (bye, goodbye)")?;
        writeln!(out, "• Thanks")?;
        writeln!(out, "• CodeAlpha internship questions")?;
        writeln!(out, "• Name questions")?;
        writeln!(out, "• Help requests")?;
        writeln!(out, "\nSpecial commands:")?;
        writeln!(out, "• Type 'history' to see our conversation")?;
        writeln!(out, "• Type 'menu' to see this menu again")?;
        writeln!(out, "• Type 'exit' or 'quit' to end the chat")?;
        writeln!(out, "{rule}")?;
        writeln!(out, "\nLet's chat! Type your message below:\n")
    }

    fn show_history(&mut self) -> io::Result<()> {
        let entries = self.session.transcript();
        if entries.is_empty() {
            return writeln!(
                self.output,
                "No conversation history yet. Let's start chatting!"
            );
        }

        let rule = "=".repeat(RULE_WIDTH);
        writeln!(self.output, "\n{rule}")?;
        writeln!(self.output, "📝 Conversation History:")?;
        writeln!(self.output, "{rule}")?;
        for (i, entry) in entries.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, entry)?;
        }
        writeln!(self.output, "{rule}")
    }
}

/// Installs a Ctrl+C handler that prints a reminder and re-prompts instead
/// of killing the process. Can only be installed once per process.
pub fn install_interrupt_reminder(bot_name: &str) -> Result<()> {
    let bot_name = bot_name.to_string();
    ctrlc::set_handler(move || {
        let mut out = io::stdout().lock();
        // Nowhere to report a failed write from the signal thread.
        let _ = write!(out, "\n\n{}: {}\nYou: ", bot_name, INTERRUPT_REMINDER);
        let _ = out.flush();
    })
    .context("Failed to install Ctrl+C handler")
}
