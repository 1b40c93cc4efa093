//! # Conversation History
//!
//! File: cli/src/bot/history.rs
//!
//! An append-only log of the turns in one session. An entry is opened when a
//! turn begins and completed once the reply is known; nothing is ever removed.
//!
use chrono::{DateTime, Local};
use std::fmt;

/// One recorded exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Local>,
    pub user_text: String,
    /// `None` only while the turn is still being answered.
    pub bot_text: Option<String>,
}

impl HistoryEntry {
    /// Renders the entry for the end-of-session transcript.
    pub fn display_with<'a>(&'a self, bot_name: &'a str) -> EntryDisplay<'a> {
        EntryDisplay {
            entry: self,
            bot_name,
        }
    }
}

/// `Display` adapter produced by [`HistoryEntry::display_with`].
pub struct EntryDisplay<'a> {
    entry: &'a HistoryEntry,
    bot_name: &'a str,
}

impl fmt::Display for EntryDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.entry.timestamp.format("%H:%M:%S"))?;
        writeln!(f, "You: {}", self.entry.user_text)?;
        write!(
            f,
            "{}: {}",
            self.bot_name,
            self.entry.bot_text.as_deref().unwrap_or("")
        )
    }
}

#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a new entry with no reply yet.
    pub fn begin(&mut self, timestamp: DateTime<Local>, user_text: &str) {
        self.entries.push(HistoryEntry {
            timestamp,
            user_text: user_text.to_string(),
            bot_text: None,
        });
    }

    /// Fills in the reply of the most recently opened entry.
    ///
    /// Does nothing if there is no open entry.
    pub fn complete(&mut self, bot_text: &str) {
        if let Some(entry) = self.entries.last_mut() {
            if entry.bot_text.is_none() {
                entry.bot_text = Some(bot_text.to_string());
            }
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}
