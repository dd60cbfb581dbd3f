//! Error types for the DDNS updater
//!
//! This module defines all error types used throughout the crate.
//!
//! Cache read anomalies (missing, empty, multi-line or malformed cache file)
//! are deliberately absent from this list: they are reported as "no cached
//! address" by the state store, never as an error.

use thiserror::Error;

/// Result type alias for DDNS operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the DDNS updater
#[derive(Error, Debug)]
pub enum Error {
    /// Network unreachable, non-success HTTP status, timeout, or unreadable body
    #[error("Transport error ({url}): {message}")]
    Transport {
        /// Redacted URL of the failed request
        url: String,
        /// Human-readable cause
        message: String,
    },

    /// The IP check service returned something that is not an IPv4 address
    #[error("Invalid IP returned by {url}: {body:?}")]
    Validation {
        /// Redacted URL of the IP check service
        url: String,
        /// The trimmed response body
        body: String,
    },

    /// A string failed IPv4 syntax validation
    #[error("Invalid IPv4 address: {0:?}")]
    InvalidAddress(String),

    /// Cache file could not be read or written
    #[error("State store error: {0}")]
    StateStore(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a transport error
    pub fn transport(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a validation error for a fetched body
    pub fn validation(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Validation {
            url: url.into(),
            body: body.into(),
        }
    }

    /// Create a state store error
    pub fn state_store(msg: impl Into<String>) -> Self {
        Self::StateStore(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error came from an outbound HTTP call
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}
