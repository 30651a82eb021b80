//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file is honored when present but never required.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Runtime configuration for the assistant bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default window for the `birthdays` command, in days (default: 7)
    pub birthday_window_days: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: default day window for `birthdays` (default: 7)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let birthday_window_days = Self::parse_env_u64("BIRTHDAY_WINDOW_DAYS", 7)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            birthday_window_days: 7,
            log_level: "error".to_string(),
        }
    }
}
