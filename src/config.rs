//! Configuration management for the contacts form.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Every setting has a default, so an empty environment is valid.

use crate::domain::phone::{DEFAULT_MAX_DIGITS, DEFAULT_MIN_DIGITS};
use crate::domain::NumberRules;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contacts form.
#[derive(Debug, Clone)]
pub struct Config {
    /// Minimum digits in a phone number (default: 3)
    pub min_phone_digits: usize,

    /// Maximum digits in a phone number (default: 15)
    pub max_phone_digits: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_MIN_PHONE_DIGITS`: Minimum phone digits (default: 3)
    /// - `CONTACTS_MAX_PHONE_DIGITS`: Maximum phone digits (default: 15)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy does not print to stdout, which carries the responses
        let _ = dotenvy::dotenv();

        let min_phone_digits =
            Self::parse_env_usize("CONTACTS_MIN_PHONE_DIGITS", DEFAULT_MIN_DIGITS)?;
        let max_phone_digits =
            Self::parse_env_usize("CONTACTS_MAX_PHONE_DIGITS", DEFAULT_MAX_DIGITS)?;

        if min_phone_digits > max_phone_digits {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_MIN_PHONE_DIGITS".to_string(),
                reason: format!(
                    "Must not exceed CONTACTS_MAX_PHONE_DIGITS ({})",
                    max_phone_digits
                ),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            min_phone_digits,
            max_phone_digits,
            log_level,
        })
    }

    /// Digit bounds for the number field.
    pub fn number_rules(&self) -> NumberRules {
        NumberRules {
            min_digits: self.min_phone_digits,
            max_digits: self.max_phone_digits,
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative integer, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            min_phone_digits: DEFAULT_MIN_DIGITS,
            max_phone_digits: DEFAULT_MAX_DIGITS,
            log_level: "error".to_string(),
        }
    }
}
