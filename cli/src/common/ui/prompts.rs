//! # Line Prompts (`common::ui::prompts`)
//!
//! File: cli/src/common/ui/prompts.rs
//!
//! ## Overview
//!
//! Small, synchronous helpers for line-oriented interaction. Every function is
//! generic over `BufRead`/`Write` so the chat loop can be driven by real
//! stdin/stdout in the binary and by in-memory buffers in tests.
//!
//! - **`read_line`**: Reads one line, returning `None` at end of input. Bytes
//!   that are not valid UTF-8 are replaced rather than rejected.
//! - **`prompt`**: Writes a prompt without a newline and flushes it.
//! - **`confirm`**: Asks a yes/no question; only `yes` or `y` count as yes.
//!
use crate::core::error::Result;
use anyhow::Context;
use std::io::{BufRead, Write};
use tracing::warn;

/// Reads one line from `input` with its line terminator removed.
///
/// Returns `Ok(None)` once the stream is closed. Invalid UTF-8 is decoded
/// lossily so any line the user types becomes text.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    let read = input
        .read_until(b'\n', &mut buf)
        .context("Failed to read from input")?;
    if read == 0 {
        return Ok(None);
    }
    let mut line = match String::from_utf8(buf) {
        Ok(line) => line,
        Err(e) => {
            warn!("Input line is not valid UTF-8; replacing invalid bytes");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    };
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

/// Writes `text` and flushes so it is visible before the user types.
pub fn prompt<W: Write>(out: &mut W, text: &str) -> Result<()> {
    write!(out, "{}", text).context("Failed to write prompt")?;
    out.flush().context("Failed to flush output")?;
    Ok(())
}

/// Returns true if `answer` is an affirmative reply.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}

/// Asks `question` and reads the answer.
///
/// End of input, or a failed read, counts as "no".
pub fn confirm<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<bool> {
    prompt(out, question)?;
    match read_line(input) {
        Ok(answer) => Ok(answer.is_some_and(|answer| is_affirmative(&answer))),
        Err(e) => {
            warn!("Could not read an answer, assuming no: {:#}", e);
            Ok(false)
        }
    }
}
