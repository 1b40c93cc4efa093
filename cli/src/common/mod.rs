//! # Chatrs Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the command handlers, kept apart from the
//! conversation engine (`bot::`) and core infrastructure (`core::`).
//!
//! - **`ui`**: Prompts, line reading, banners and tables for the terminal.
//!

/// Utilities for terminal user interface elements (prompts, banners, tables).
pub mod ui;
