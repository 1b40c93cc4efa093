//! # Chatrs Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Foundational pieces shared by every command:
//! - `config`: Optional TOML configuration loading and validation
//! - `error`: Error types and the crate-wide `Result` alias
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{ChatError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
