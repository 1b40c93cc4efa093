//! # Chat Session Loop
//!
//! File: cli/src/commands/chat/session.rs
//!
//! ## Overview
//!
//! The interactive read loop behind `chatrs chat`:
//!
//! 1. Print the welcome banner
//! 2. Prompt, read a line; blank lines get a reminder and are not recorded
//! 3. Reply to the raw line and print it under the bot's name
//! 4. Stop after a farewell, or when input ends (a failed read counts as the end)
//! 5. Print the closing banner and offer to show the transcript
//!
//! The loop is generic over its input and output so tests can drive it with
//! in-memory buffers.
//!
use crate::bot::responder::Responder;
use crate::common::ui::{self, prompts};
use crate::core::error::{ChatError, Result};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

const HISTORY_QUESTION: &str = "Would you like to see the conversation history? (yes/no): ";

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user said goodbye.
    Farewell,
    /// The input stream closed.
    EndOfInput,
}

/// Writes one line of conversation output.
fn say<W: Write>(out: &mut W, text: &str) -> Result<()> {
    writeln!(out, "{}", text).map_err(|e| ChatError::Terminal(e.to_string()))?;
    Ok(())
}

/// Runs a full session on `input`/`out`: banner, loop, closing, transcript.
pub fn run<R, I, W>(bot: &mut Responder<'_, R>, input: &mut I, out: &mut W) -> Result<SessionEnd>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    print_welcome(bot.bot_name(), out)?;
    info!("Chat session started");

    let end = chat_loop(bot, input, out)?;
    info!(
        "Chat session ended ({:?}) after {} turn(s)",
        end,
        bot.history().len()
    );

    say(out, "")?;
    say(out, &ui::heading("Thank you for chatting! Conversation ended."))?;

    offer_history(bot, input, out)?;
    Ok(end)
}

fn print_welcome<W: Write>(bot_name: &str, out: &mut W) -> Result<()> {
    say(out, "")?;
    say(out, &ui::heading("WELCOME TO CHATRS!"))?;
    say(
        out,
        &format!("\nHello! I'm {bot_name}, a simple chatbot. Type 'bye' or 'quit' to exit."),
    )?;
    say(out, "Try saying hello, asking how I am, or just chat with me!")?;
    say(out, &ui::rule('-'))
}

fn chat_loop<R, I, W>(bot: &mut Responder<'_, R>, input: &mut I, out: &mut W) -> Result<SessionEnd>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    loop {
        prompts::prompt(out, "\nYou: ")?;

        let line = match prompts::read_line(input) {
            Ok(Some(line)) => line,
            Ok(None) => {
                debug!("Input closed, treating as farewell");
                say(out, "")?;
                return Ok(SessionEnd::EndOfInput);
            }
            Err(e) => {
                warn!("Input stopped being readable, ending the session: {:#}", e);
                say(out, "")?;
                return Ok(SessionEnd::EndOfInput);
            }
        };

        if line.trim().is_empty() {
            say(out, &format!("{}: Please say something!", bot.bot_name()))?;
            continue;
        }

        let reply = bot.respond(&line);
        say(out, &format!("{}: {}", bot.bot_name(), reply))?;

        if bot.is_farewell(&line) {
            return Ok(SessionEnd::Farewell);
        }
    }
}

fn offer_history<R, I, W>(bot: &Responder<'_, R>, input: &mut I, out: &mut W) -> Result<()>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    let history = bot.history();
    if history.len() <= 1 {
        return Ok(());
    }

    say(
        out,
        &format!(
            "\nYou exchanged {} messages in this conversation.",
            history.len()
        ),
    )?;
    if !prompts::confirm(input, out, HISTORY_QUESTION)? {
        return Ok(());
    }

    say(out, "")?;
    say(out, &ui::heading("CONVERSATION HISTORY"))?;
    for entry in history {
        say(out, &format!("\n{}", entry.display_with(bot.bot_name())))?;
    }
    say(out, "")?;
    say(out, &ui::rule('='))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::patterns::PatternTable;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::{self, BufReader, Cursor, Read};

    struct Outcome {
        end: SessionEnd,
        users: Vec<String>,
        replies: Vec<String>,
        output: String,
        consumed: u64,
    }

    fn drive(table: &PatternTable, script: &str) -> Outcome {
        drive_bytes(table, script.as_bytes())
    }

    fn drive_bytes(table: &PatternTable, script: &[u8]) -> Outcome {
        let mut bot = Responder::new(table, "Rusty", StdRng::seed_from_u64(3));
        let mut input = Cursor::new(script.to_vec());
        let mut out = Vec::new();
        let end = run(&mut bot, &mut input, &mut out).expect("session runs");
        Outcome {
            end,
            users: bot.history().iter().map(|e| e.user_text.clone()).collect(),
            replies: bot
                .history()
                .iter()
                .map(|e| e.bot_text.clone().unwrap_or_default())
                .collect(),
            output: String::from_utf8(out).expect("utf-8 output"),
            consumed: input.position(),
        }
    }

    fn replies_for(table: &PatternTable, key: &str) -> Vec<String> {
        table
            .patterns()
            .iter()
            .find(|p| p.key() == key)
            .expect("pattern exists")
            .replies()
            .as_slice()
            .to_vec()
    }

    #[test]
    fn test_three_turn_conversation_ends_on_bye() {
        let table = PatternTable::builtin();
        let script = "hello\nhow are you\nbye\nno\nnever read\n";
        let outcome = drive(&table, script);

        assert_eq!(outcome.end, SessionEnd::Farewell);
        assert_eq!(outcome.users, vec!["hello", "how are you", "bye"]);
        assert!(replies_for(&table, "hello").contains(&outcome.replies[0]));
        assert!(replies_for(&table, "how are you").contains(&outcome.replies[1]));
        assert!(replies_for(&table, "bye").contains(&outcome.replies[2]));

        // Nothing after the history answer is consumed.
        let expected = "hello\nhow are you\nbye\nno\n".len() as u64;
        assert_eq!(outcome.consumed, expected);
        assert!(outcome.output.contains("You exchanged 3 messages in this conversation."));
        assert!(!outcome.output.contains("CONVERSATION HISTORY"));
    }

    #[test]
    fn test_blank_lines_are_not_turns() {
        let table = PatternTable::builtin();
        let outcome = drive(&table, "\n   \nhello\n\t\nbye\nno\n");

        assert_eq!(outcome.users, vec!["hello", "bye"]);
        assert_eq!(
            outcome.output.matches("Rusty: Please say something!").count(),
            3
        );
    }

    #[test]
    fn test_end_of_input_ends_session_gracefully() {
        let table = PatternTable::builtin();
        let outcome = drive(&table, "hello\n");

        assert_eq!(outcome.end, SessionEnd::EndOfInput);
        assert_eq!(outcome.users, vec!["hello"]);
        assert!(outcome.output.contains("Thank you for chatting! Conversation ended."));
        // A single turn does not earn a summary.
        assert!(!outcome.output.contains("You exchanged"));
    }

    #[test]
    fn test_end_of_input_at_history_question_means_no() {
        let table = PatternTable::builtin();
        let outcome = drive(&table, "hello\nbye\n");

        assert_eq!(outcome.end, SessionEnd::Farewell);
        assert!(outcome.output.contains(HISTORY_QUESTION));
        assert!(!outcome.output.contains("CONVERSATION HISTORY"));
    }

    #[test]
    fn test_history_is_printed_on_yes() {
        let table = PatternTable::builtin();
        let outcome = drive(&table, "Hello\nthanks, bye\nY\n");

        assert!(outcome.output.contains("CONVERSATION HISTORY"));
        assert!(outcome.output.contains("You: Hello\nRusty: "));
        assert!(outcome
            .output
            .contains(&format!("You: thanks, bye\nRusty: {}", outcome.replies[1])));
        let stamps = outcome
            .output
            .lines()
            .filter(|l| l.len() == 10 && l.starts_with('[') && l.ends_with(']'))
            .count();
        assert_eq!(stamps, 2);
    }

    #[test]
    fn test_single_farewell_skips_summary() {
        let table = PatternTable::builtin();
        let outcome = drive(&table, "bye\n");

        assert_eq!(outcome.end, SessionEnd::Farewell);
        assert_eq!(outcome.users.len(), 1);
        assert!(!outcome.output.contains("You exchanged"));
    }

    #[test]
    fn test_raw_line_is_recorded_and_replies_are_prefixed() {
        let table = PatternTable::builtin();
        let outcome = drive(&table, "  Hello  \r\nquit\nno\n");

        assert_eq!(outcome.users, vec!["  Hello  ", "quit"]);
        assert!(outcome
            .output
            .contains(&format!("Rusty: {}", outcome.replies[0])));
        assert!(outcome.output.contains("WELCOME TO CHATRS!"));
        assert!(outcome.output.contains("I'm Rusty, a simple chatbot"));
    }

    #[test]
    fn test_invalid_utf8_line_is_an_ordinary_turn() {
        let table = PatternTable::builtin();
        let outcome = drive_bytes(&table, b"hello\ncaf\xe9\nbye\nno\n");

        assert_eq!(outcome.end, SessionEnd::Farewell);
        assert_eq!(outcome.users.len(), 3);
        assert_eq!(outcome.users[1], "caf\u{FFFD}");
        assert!(table.fallback().as_slice().contains(&outcome.replies[1]));
        assert!(outcome.output.contains("Thank you for chatting! Conversation ended."));
        assert!(outcome.output.contains("You exchanged 3 messages in this conversation."));
    }

    /// Serves `data`, then fails every read after it.
    struct FailsAfter {
        data: Cursor<Vec<u8>>,
    }

    impl Read for FailsAfter {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.read(buf)? {
                0 => Err(io::Error::new(io::ErrorKind::Other, "terminal went away")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn test_read_failure_ends_session_gracefully() {
        let table = PatternTable::builtin();
        let mut bot = Responder::new(&table, "Rusty", StdRng::seed_from_u64(3));
        let mut input = BufReader::new(FailsAfter {
            data: Cursor::new(b"hello\nhow are you\n".to_vec()),
        });
        let mut out = Vec::new();

        let end = run(&mut bot, &mut input, &mut out).expect("session runs");
        let output = String::from_utf8(out).expect("utf-8 output");

        assert_eq!(end, SessionEnd::EndOfInput);
        assert_eq!(bot.history().len(), 2);
        assert!(output.contains("Thank you for chatting! Conversation ended."));
        // The history question cannot be answered either, so it counts as no.
        assert!(output.contains(HISTORY_QUESTION));
        assert!(!output.contains("CONVERSATION HISTORY"));
    }
}
