//! # Chatrs Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the chatrs CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading the optional configuration file
//! - Routing execution to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Start a conversation (same as `chatrs chat`)
//! chatrs
//!
//! # Use a custom pattern table and show debug logs on stderr
//! chatrs -vv --config ~/chatrs.toml chat
//!
//! # Inspect the pattern table
//! chatrs patterns --replies
//! ```
//!
//! Logs go to stderr so stdout carries only the conversation.
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod bot; // Conversation engine (patterns, responder, history)
mod commands; // Command handlers (chat, patterns)
mod common; // Terminal UI helpers
mod core; // Configuration and error types

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "chatrs",
    about = "A rule-based chatbot for the terminal",
    long_about = "Chat with a keyword-matching bot. Replies are picked at random from\n\
                  canned lists; say 'bye' or 'quit' to end the conversation.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// TOML file overriding the bot name, pattern table or fallback replies.
    #[arg(long, short, global = true, value_name = "FILE")]
    config: Option<String>,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    /// Start an interactive conversation (default).
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    /// Show the active pattern table.
    #[command(alias = "p")]
    Patterns(commands::patterns::PatternsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = core::config::load_config(cli.config.as_deref()).and_then(|settings| {
        match cli.command.unwrap_or_else(|| Commands::Chat(Default::default())) {
            Commands::Chat(args) => commands::chat::handle_chat(args, &settings),
            Commands::Patterns(args) => commands::patterns::handle_patterns(args, &settings),
        }
    });

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
