//! # Chatrs Conversation Engine (`bot`)
//!
//! File: cli/src/bot/mod.rs
//!
//! ## Overview
//!
//! Everything needed to hold a conversation, independent of the terminal:
//!
//! - **`patterns`**: The ordered keyword table, fallback replies, and first-match lookup.
//! - **`template`**: Rendering of `{name}` and `{now:FMT}` inside replies.
//! - **`history`**: The append-only log of turns.
//! - **`responder`**: Ties the above together into `respond` and `is_farewell`.
//!
//! The table is built once and borrowed by the responder; the responder owns
//! the history for the lifetime of the session.
//!

/// Keyword patterns, fallback replies, and lookup.
pub mod patterns;
/// Reply template rendering.
pub mod template;
/// Conversation history.
pub mod history;
/// Reply selection and farewell detection.
pub mod responder;
