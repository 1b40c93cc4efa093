//! # Responder
//!
//! File: cli/src/bot/responder.rs
//!
//! ## Overview
//!
//! Turns one line of user input into one reply and records the turn.
//!
//! 1. Normalize the input (lowercase, trim)
//! 2. Find the first matching pattern in the table
//! 3. Pick a reply uniformly from that pattern, or from the fallback list
//! 4. Render the template at the current instant
//! 5. Record `{timestamp, original input, reply}` in the history
//!
//! The farewell check is separate: it never looks at the table or the history.
//!
//! ## Examples
//!
//! ```rust,ignore
//! let table = PatternTable::builtin();
//! let mut bot = Responder::new(&table, "Rusty", StdRng::from_entropy());
//!
//! let reply = bot.respond("Hello!");
//! if bot.is_farewell("bye") { /* end the session */ }
//! ```
//!
use crate::bot::history::{History, HistoryEntry};
use crate::bot::patterns::{normalize, PatternTable};
use crate::bot::template::{self, ReplyContext};
use chrono::{DateTime, Local};
use rand::Rng;
use tracing::debug;

/// Words that end a session when they appear anywhere in the input.
pub const FAREWELL_WORDS: [&str; 5] = ["bye", "goodbye", "exit", "quit", "see you"];

/// Returns `true` if the normalized input contains any farewell word.
pub fn is_farewell(input: &str) -> bool {
    let normalized = normalize(input);
    FAREWELL_WORDS.iter().any(|word| normalized.contains(*word))
}

/// A single conversation: borrows the table, owns its history and RNG.
pub struct Responder<'t, R> {
    table: &'t PatternTable,
    bot_name: String,
    history: History,
    rng: R,
}

impl<'t, R: Rng> Responder<'t, R> {
    pub fn new(table: &'t PatternTable, bot_name: &str, rng: R) -> Self {
        Self {
            table,
            bot_name: bot_name.to_string(),
            history: History::new(),
            rng,
        }
    }

    pub fn bot_name(&self) -> &str {
        &self.bot_name
    }

    /// Replies to `input` as of now and records the turn.
    ///
    /// Callers filter out blank input beforehand.
    pub fn respond(&mut self, input: &str) -> String {
        self.respond_at(input, Local::now())
    }

    /// Same as [`respond`](Self::respond) with an explicit instant, used for
    /// both the history timestamp and any `{now:...}` in the reply.
    pub fn respond_at(&mut self, input: &str, now: DateTime<Local>) -> String {
        self.history.begin(now, input);

        let table = self.table;
        let normalized = normalize(input);
        let replies = match table.lookup(&normalized) {
            Some(pattern) => {
                debug!("Input matched pattern '{}'", pattern.key());
                pattern.replies()
            }
            None => {
                debug!("No pattern matched; using a fallback reply");
                table.fallback()
            }
        };

        let chosen = replies.pick(&mut self.rng);
        let reply = template::render(
            chosen,
            &ReplyContext {
                bot_name: &self.bot_name,
                now,
            },
        );

        self.history.complete(&reply);
        reply
    }

    /// See [`is_farewell`].
    pub fn is_farewell(&self, input: &str) -> bool {
        is_farewell(input)
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.history.entries()
    }
}
