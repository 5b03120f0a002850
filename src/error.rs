//! Error types for the FlowDB shell.
//!
//! Defines the application-level error enum. Line parsing has its own
//! error type in [`crate::commands::ParseError`].

use thiserror::Error;

/// Main error type for shell operations.
#[derive(Error, Debug)]
pub enum FlowError {
    /// Configuration errors (unreadable or invalid config file, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl FlowError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "Configuration Error",
            Self::Io(_) => "I/O Error",
        }
    }
}

/// Result type alias using FlowError.
pub type Result<T> = std::result::Result<T, FlowError>;
