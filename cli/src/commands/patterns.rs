//! # Chatrs Patterns Command
//!
//! File: cli/src/commands/patterns.rs
//!
//! ## Overview
//!
//! Implements `chatrs patterns`, which prints the active pattern table in
//! matching order followed by the fallback replies. Useful for spotting keys
//! that shadow later ones before editing a config file.
//!
//! Example output:
//!
//! ```text
//! #  | Pattern
//! ---+------------------------------
//! 1  | hello (4 replies)
//! 2  | hi (3 replies)
//! ...
//! Fallback: 6 replies
//! ```
//!
use crate::bot::patterns::PatternTable;
use crate::common::ui;
use crate::core::config::Settings;
use crate::core::error::Result;
use clap::Parser;
use tracing::info;

/// # Patterns Arguments (`PatternsArgs`)
#[derive(Parser, Debug)]
pub struct PatternsArgs {
    /// List every reply template instead of a count.
    #[arg(long, short)]
    pub replies: bool,
}

pub fn handle_patterns(args: PatternsArgs, settings: &Settings) -> Result<()> {
    info!("Handling patterns command...");
    print!("{}", render_patterns(&settings.table, args.replies));
    Ok(())
}

fn describe(count: usize) -> String {
    if count == 1 {
        "1 reply".to_string()
    } else {
        format!("{count} replies")
    }
}

/// Formats the table for display.
fn render_patterns(table: &PatternTable, show_replies: bool) -> String {
    let mut rows = Vec::new();
    for (index, pattern) in table.patterns().iter().enumerate() {
        let position = (index + 1).to_string();
        if show_replies {
            rows.push((position, pattern.key().to_string()));
            for reply in pattern.replies().as_slice() {
                rows.push((String::new(), format!("  - {reply}")));
            }
        } else {
            rows.push((
                position,
                format!("{} ({})", pattern.key(), describe(pattern.replies().len())),
            ));
        }
    }

    let mut out = ui::table(("#", "Pattern"), &rows);
    out.push_str(&format!("\nFallback: {}\n", describe(table.fallback().len())));
    if show_replies {
        for reply in table.fallback().as_slice() {
            out.push_str(&format!("  - {reply}\n"));
        }
    }
    out.push_str("\nPatterns are tried top to bottom; the first key found in the input wins.\n");
    out
}
