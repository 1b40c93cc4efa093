//! # Chatrs Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout chatrs. Producing a
//! reply can never fail, so the errors here only cover the edges of the
//! program: building a pattern table, loading a configuration file, and
//! talking to the terminal.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ChatError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error type
//! if replies.is_empty() {
//!     return Err(ChatError::EmptyReplies { key: key.to_string() })?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read config file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the chatrs application.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Pattern keys cannot be empty.")]
    EmptyPatternKey,

    #[error("Pattern '{key}' has no replies.")]
    EmptyReplies { key: String },

    #[error("The fallback reply list cannot be empty.")]
    EmptyFallback,

    #[error("Invalid time format '{format}' in reply template.")]
    InvalidTimeFormat { format: String },

    #[error("Terminal I/O failed: {0}")]
    Terminal(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = ChatError::Config("bot_name cannot be empty".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: bot_name cannot be empty"
        );

        let empty = ChatError::EmptyReplies {
            key: "hello".into(),
        };
        assert_eq!(empty.to_string(), "Pattern 'hello' has no replies.");

        let bad_format = ChatError::InvalidTimeFormat {
            format: "%Q".into(),
        };
        assert_eq!(
            bad_format.to_string(),
            "Invalid time format '%Q' in reply template."
        );
    }

    #[test]
    fn test_errors_convert_into_anyhow() {
        let result: Result<()> = Err(ChatError::EmptyFallback.into());
        let err = result.unwrap_err();
        assert_eq!(
            err.downcast_ref::<ChatError>(),
            Some(&ChatError::EmptyFallback)
        );
    }
}
