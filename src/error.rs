//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Domain validation errors live in [`crate::domain::errors`] and are wrapped here at
//! the command boundary.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur while executing a single command.
///
/// Every variant is recoverable: the command loop renders the one-line
/// message and keeps going. A missing contact is deliberately NOT an error
/// variant; handlers render it as a normal "not found" result.
#[derive(Error, Debug)]
pub enum CommandError {
    /// A field value failed domain validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The command was called with the wrong arguments
    #[error("Usage: {0}")]
    Usage(&'static str),

    /// The `birthdays` day-count argument was not a non-negative number
    #[error("Invalid number of days: {0}")]
    InvalidDays(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
