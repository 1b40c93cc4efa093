//! # Chatrs Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! The top-level commands of the chatrs CLI. Each command defines its own
//! arguments struct and a handler that receives the loaded configuration.
//!
//! - `chat`: The interactive conversation (default command)
//! - `patterns`: Listing of the active pattern table
//!

/// The interactive chat session. Includes the read loop in `chat::session`.
pub mod chat;
/// Prints the active pattern table and fallback replies.
pub mod patterns;
