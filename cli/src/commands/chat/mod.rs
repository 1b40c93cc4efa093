//! # Chatrs Chat Command
//!
//! File: cli/src/commands/chat/mod.rs
//!
//! ## Overview
//!
//! Implements `chatrs chat`, the interactive conversation. It is also what
//! runs when `chatrs` is started without a subcommand.
//!
//! ## Examples
//!
//! ```bash
//! # Start chatting with the default bot
//! chatrs
//!
//! # Rename the bot and make reply choices reproducible
//! chatrs chat --name Ferris --seed 7
//! ```
//!
use crate::bot::responder::Responder;
use crate::core::config::Settings;
use crate::core::error::Result;
use clap::{builder::NonEmptyStringValueParser, Parser};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use tracing::{debug, info};

pub mod session;

/// # Chat Arguments (`ChatArgs`)
#[derive(Parser, Debug, Default)]
pub struct ChatArgs {
    /// Display name of the bot. Overrides `bot_name` from the config file.
    #[arg(long, short, value_parser = NonEmptyStringValueParser::new())]
    pub name: Option<String>,

    /// Seed for reply selection, for reproducible sessions.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// # Handle Chat Command (`handle_chat`)
///
/// Runs a session with the configured pattern table on the process's stdin
/// and stdout until the user says goodbye or input ends.
pub fn handle_chat(args: ChatArgs, settings: &Settings) -> Result<()> {
    let table = &settings.table;
    let bot_name = args.name.as_deref().unwrap_or(settings.bot_name.as_str());

    let rng = match args.seed {
        Some(seed) => {
            debug!("Seeding reply selection with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    info!(
        "Starting chat as '{}' with {} pattern(s)",
        bot_name,
        table.patterns().len()
    );
    let mut responder = Responder::new(table, bot_name, rng);

    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run(&mut responder, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
