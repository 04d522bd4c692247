//! # Chat Responder
//!
//! File: cli/src/commands/chat/responder.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Turns one line of user input into one reply. Matching is plain substring
//! search over the lowercased input, applied as a fixed priority list:
//!
//! 1. Blank input gets a fixed "didn't catch that" reply.
//! 2. "my name is X" stores `X` (first word, capitalized) on the session.
//! 3. If the name is known, any of "hello"/"hi"/"hey" gets a personalized greeting.
//! 4. The first category, in table order, with a pattern in the input.
//! 5. The `default` category.
//!
//! Both the user line and the reply are appended to the session transcript.
//!
//! ## Randomness
//!
//! `Responder` is generic over `rand::Rng` so tests can pin a seed. With a
//! fixed seed the whole conversation is reproducible.
//!
use crate::commands::chat::session::{Session, Speaker};
use crate::core::config::{Category, CategoryTable, DEFAULT_CATEGORY};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, info};

/// Reply for input that is empty after trimming.
pub const EMPTY_INPUT_REPLY: &str = "I didn't catch that. Could you please type something?";

const NAME_PHRASE: &str = "my name is";
const KNOWN_USER_GREETINGS: [&str; 3] = ["hello", "hi", "hey"];

pub const GREETINGS: &str = "greetings";
pub const HOW_ARE_YOU: &str = "how_are_you";
pub const FAREWELL: &str = "farewell";

/// Rule-based responder over an immutable category table.
pub struct Responder<R: Rng> {
    table: CategoryTable,
    rng: R,
}

impl<R: Rng> Responder<R> {
    /// Creates a responder over a validated `table`, drawing replies with `rng`.
    ///
    /// # Arguments
    ///
    /// * `table` - The category table, usually from `config::load_table`.
    /// * `rng` - Any `rand::Rng`; pass a seeded `StdRng` for reproducible replies.
    pub fn new(table: CategoryTable, rng: R) -> Self {
        Self { table, rng }
    }

    pub fn table(&self) -> &CategoryTable {
        &self.table
    }

    pub fn bot_name(&self) -> &str {
        &self.table.bot_name
    }

    /// # Respond to Input (`respond`)
    ///
    /// Answers one line of user input. Rules are tried in priority order
    /// (blank input, "my name is", known-user greeting, categories in table
    /// order, `default`) and the first that applies produces the reply.
    ///
    /// Both the raw `input` and the reply are appended to the transcript,
    /// whichever rule fired. "my name is X" also stores `X` on `session`.
    ///
    /// # Arguments
    ///
    /// * `session` - The state of the current chat; updated in place.
    /// * `input` - The line as typed. Matching ignores case and surrounding whitespace.
    ///
    /// # Returns
    ///
    /// * `String` - The reply, with `{bot_name}` already rendered.
    ///
    /// # Examples
    ///
    /// ```
    /// use codealpha::commands::chat::{Responder, Session};
    /// use codealpha::core::config::builtin_table;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut bot = Responder::new(builtin_table()?, StdRng::seed_from_u64(7));
    /// let mut session = Session::new();
    ///
    /// let reply = bot.respond(&mut session, "  My name is ada lovelace");
    /// assert_eq!(reply, "Nice to meet you, Ada! How can I help you today?");
    /// assert_eq!(session.user_name(), Some("Ada"));
    /// assert_eq!(session.exchanged_pairs(), 1);
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn respond(&mut self, session: &mut Session, input: &str) -> String {
        session.record(Speaker::User, input);
        let reply = self.reply_for(session, input);
        session.record(Speaker::Bot, reply.clone());
        reply
    }

    /// Picks a uniformly random reply from the named category.
    ///
    /// Does not touch any session; the chat loop uses it for the farewell
    /// printed on `exit`.
    ///
    /// # Arguments
    ///
    /// * `category` - A category name such as `"farewell"`.
    ///
    /// # Returns
    ///
    /// * `Option<String>` - The rendered reply, or `None` if the table has no
    ///   category by that name.
    pub fn reply_from(&mut self, category: &str) -> Option<String> {
        let category = self.table.get(category)?;
        Some(choose_reply(&mut self.rng, &self.table, category))
    }

    fn reply_for(&mut self, session: &mut Session, input: &str) -> String {
        let normalized = input.trim().to_lowercase();
        if normalized.is_empty() {
            return EMPTY_INPUT_REPLY.to_string();
        }

        if let Some(name) = extract_user_name(&normalized) {
            info!("User introduced themselves as '{}'", name);
            let reply = format!("Nice to meet you, {name}! How can I help you today?");
            session.set_user_name(name);
            return reply;
        }

        if let Some(name) = session.user_name() {
            let greeted = KNOWN_USER_GREETINGS
                .iter()
                .any(|greeting| normalized.contains(greeting));
            if greeted {
                if let Some(greeting) = self.reply_from(GREETINGS) {
                    debug!("Greeting known user '{}'", name);
                    return format!("{greeting} Nice to see you again, {name}!");
                }
            }
        }

        let matched = self
            .table
            .categories
            .iter()
            .filter(|category| !category.is_fallback())
            .find(|category| category.matches(&normalized));

        if let Some(category) = matched {
            debug!("Input matched category '{}'", category.name);
            let reply = choose_reply(&mut self.rng, &self.table, category);
            let personalize = category.name == GREETINGS || category.name == HOW_ARE_YOU;
            return match session.user_name() {
                Some(name) if personalize => format!("{reply} How are you doing, {name}?"),
                _ => reply,
            };
        }

        debug!("No category matched; using fallback");
        self.reply_from(DEFAULT_CATEGORY).unwrap_or_default()
    }
}

fn choose_reply<R: Rng>(rng: &mut R, table: &CategoryTable, category: &Category) -> String {
    category
        .replies
        .choose(rng)
        .map(|reply| table.render(reply))
        .unwrap_or_default()
}

/// Pulls the user's name out of lowercased input containing "my name is".
///
/// Uses the text after the last occurrence of the phrase and keeps only its
/// first word. Returns `None` when nothing follows the phrase.
fn extract_user_name(normalized: &str) -> Option<String> {
    let start = normalized.rfind(NAME_PHRASE)? + NAME_PHRASE.len();
    normalized[start..].split_whitespace().next().map(capitalize)
}

/// First character uppercased, the rest lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{builtin_table, parse_table};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn builtin(seed: u64) -> Responder<StdRng> {
        Responder::new(builtin_table().unwrap(), StdRng::seed_from_u64(seed))
    }

    fn replies_of(responder: &Responder<StdRng>, name: &str) -> Vec<String> {
        let table = responder.table();
        table
            .get(name)
            .unwrap()
            .replies
            .iter()
            .map(|r| table.render(r))
            .collect()
    }

    #[test]
    fn test_empty_input_gets_fixed_reply() {
        let mut bot = builtin(1);
        let mut session = Session::new();
        assert_eq!(bot.respond(&mut session, ""), EMPTY_INPUT_REPLY);
        assert_eq!(bot.respond(&mut session, "   "), EMPTY_INPUT_REPLY);
        // Both sides are still recorded.
        assert_eq!(session.transcript().len(), 4);
        assert_eq!(session.transcript()[2].text, "   ");
    }

    #[test]
    fn test_single_category_match() {
        let mut bot = builtin(2);
        let mut session = Session::new();
        let thanks = replies_of(&bot, "thanks");
        let codealpha = replies_of(&bot, "codealpha");
        let name = replies_of(&bot, "name");

        for _ in 0..10 {
            assert!(thanks.contains(&bot.respond(&mut session, "Thanks a lot")));
            assert!(codealpha.contains(&bot.respond(&mut session, "  Any ASSIGNMENT news?")));
        }
        let reply = bot.respond(&mut session, "What is your name?");
        assert!(name.contains(&reply));
        assert!(reply.contains("CodeAlpha Assistant"));
    }

    #[test]
    fn test_unmatched_input_uses_default() {
        let mut bot = builtin(3);
        let mut session = Session::new();
        let defaults = replies_of(&bot, "default");
        let reply = bot.respond(&mut session, "purple elephants");
        assert!(defaults.contains(&reply));
    }

    #[test]
    fn test_name_is_captured_and_used_in_greeting() {
        let mut bot = builtin(4);
        let mut session = Session::new();

        let ack = bot.respond(&mut session, "Hi, my name is aLICE smith");
        assert_eq!(ack, "Nice to meet you, Alice! How can I help you today?");
        assert_eq!(session.user_name(), Some("Alice"));

        let greeting = bot.respond(&mut session, "hello again");
        assert!(greeting.ends_with(" Nice to see you again, Alice!"));
        let base = greeting.trim_end_matches(" Nice to see you again, Alice!");
        assert!(replies_of(&bot, GREETINGS).contains(&base.to_string()));
    }

    #[test]
    fn test_how_are_you_is_personalized_when_name_known() {
        let mut bot = builtin(5);
        let mut session = Session::new();
        bot.respond(&mut session, "my name is bob");

        let reply = bot.respond(&mut session, "How are you doing?");
        assert!(reply.ends_with(" How are you doing, Bob?"));
        let base = reply.trim_end_matches(" How are you doing, Bob?");
        assert!(replies_of(&bot, HOW_ARE_YOU).contains(&base.to_string()));
    }

    #[test]
    fn test_no_suffix_without_name() {
        let mut bot = builtin(6);
        let mut session = Session::new();
        let reply = bot.respond(&mut session, "how are you");
        assert!(replies_of(&bot, HOW_ARE_YOU).contains(&reply));
    }

    #[test]
    fn test_name_phrase_wins_over_categories() {
        let mut bot = builtin(7);
        let mut session = Session::new();
        let reply = bot.respond(&mut session, "thanks, my name is carol, bye");
        assert_eq!(reply, "Nice to meet you, Carol,! How can I help you today?");
    }

    #[test]
    fn test_bare_name_phrase_falls_through() {
        let mut bot = builtin(8);
        let mut session = Session::new();
        let reply = bot.respond(&mut session, "my name is");
        assert!(session.user_name().is_none());
        assert!(replies_of(&bot, "default").contains(&reply));
    }

    #[test]
    fn test_earlier_category_wins_on_overlap() {
        let table = parse_table(
            r#"
            [[category]]
            name = "first"
            patterns = ["ab"]
            replies = ["from first"]

            [[category]]
            name = "second"
            patterns = ["abc"]
            replies = ["from second"]

            [[category]]
            name = "default"
            replies = ["fallback"]
            "#,
        )
        .unwrap();
        let mut bot = Responder::new(table, StdRng::seed_from_u64(0));
        let mut session = Session::new();
        assert_eq!(bot.respond(&mut session, "xabcx"), "from first");
        assert_eq!(bot.respond(&mut session, "zzz"), "fallback");
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let inputs = ["hello", "how are you", "thanks", "what?", "project", "bye"];
        let run = |seed| {
            let mut bot = builtin(seed);
            let mut session = Session::new();
            inputs
                .iter()
                .map(|input| bot.respond(&mut session, input))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
    }

    #[test]
    fn test_transcript_records_every_turn() {
        let mut bot = builtin(9);
        let mut session = Session::new();
        bot.respond(&mut session, "Hello There");
        bot.respond(&mut session, "my name is dan");

        let entries = session.transcript();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].speaker, Speaker::User);
        assert_eq!(entries[0].text, "Hello There");
        assert_eq!(entries[3].speaker, Speaker::Bot);
        assert_eq!(
            entries[3].text,
            "Nice to meet you, Dan! How can I help you today?"
        );
        assert_eq!(session.exchanged_pairs(), 2);
    }

    #[test]
    fn test_reply_from_missing_category() {
        let mut bot = builtin(10);
        assert!(bot.reply_from("nonexistent").is_none());
        assert!(replies_of(&bot, FAREWELL).contains(&bot.reply_from(FAREWELL).unwrap()));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("alice"), "Alice");
        assert_eq!(capitalize("éloïse"), "Éloïse");
        assert_eq!(capitalize(""), "");
    }
}
