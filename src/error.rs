//! Error types for the contacts form.
//!
//! Field validation failures live in [`crate::domain::ValidationError`]; they are
//! user-correctable and reported back through the form rather than propagated.
//! This module covers the remaining failure kinds.

use thiserror::Error;

pub use crate::domain::ValidationError;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while serving form requests over stdio.
#[derive(Error, Debug)]
pub enum SessionError {
    /// A request line was not valid JSON for the expected shape
    #[error("Malformed request: {0}")]
    MalformedRequest(#[from] serde_json::Error),

    /// A request line was not valid UTF-8
    #[error("Malformed request: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    /// Reading from or writing to the transport failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with SessionError
pub type SessionResult<T> = Result<T, SessionError>;
