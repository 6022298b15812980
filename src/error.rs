//! Unified error types for smoldump.
//!
//! This module provides a single [`SmoldumpError`] enum that covers every
//! failure a range export can hit, from a rejected token to a full disk.
//!
//! # Error Handling Philosophy
//!
//! - Nothing is retried. Every error propagates unmodified to the caller.
//! - **Library users** get typed errors they can match on
//! - **CLI users** get the message printed verbatim, and no output file

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for smoldump operations.
///
/// # Example
///
/// ```rust
/// use smoldump::error::Result;
/// use smoldump::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, SmoldumpError>;

/// The error type for all smoldump operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SmoldumpError {
    /// The remote rejected the credential (HTTP 401 or 403).
    #[error("Authentication failed (HTTP {status}): {message}")]
    Authentication {
        /// HTTP status returned by the API
        status: u16,
        /// Body or reason phrase returned by the API
        message: String,
    },

    /// The channel does not exist or is not visible (HTTP 404).
    #[error("Channel {channel} not found: {message}")]
    NotFound {
        /// The channel id that was requested
        channel: String,
        /// Body or reason phrase returned by the API
        message: String,
    },

    /// The request could not be completed or its body could not be decoded.
    #[error("Transport error while {context}: {source}")]
    Transport {
        /// What was being done when the failure happened
        context: String,
        /// The underlying HTTP client error
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a status that has no dedicated variant.
    #[error("Unexpected HTTP {status} from API: {body}")]
    UnexpectedStatus {
        /// HTTP status returned by the API
        status: u16,
        /// Response body, possibly empty
        body: String,
    },

    /// A required parameter is missing or invalid.
    #[error("Invalid configuration: {message}")]
    Config {
        /// Description of what's wrong
        message: String,
    },

    /// A string could not be parsed as a message/channel id.
    #[error("Invalid id '{input}': expected a positive integer snowflake")]
    InvalidSnowflake {
        /// The rejected input
        input: String,
    },

    /// An I/O error occurred while writing the output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rendered output was not valid UTF-8.
    #[error("UTF-8 encoding error in rendered output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl SmoldumpError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        SmoldumpError::Config {
            message: message.into(),
        }
    }

    /// Creates an invalid snowflake error.
    pub fn invalid_snowflake(input: impl Into<String>) -> Self {
        SmoldumpError::InvalidSnowflake {
            input: input.into(),
        }
    }

    /// Creates a transport error with context.
    pub fn transport(context: impl Into<String>, source: reqwest::Error) -> Self {
        SmoldumpError::Transport {
            context: context.into(),
            source,
        }
    }

    /// Maps a non-success HTTP status to the matching error variant.
    pub fn from_status(status: u16, channel: impl Into<String>, body: impl Into<String>) -> Self {
        let body = body.into();
        match status {
            401 | 403 => SmoldumpError::Authentication {
                status,
                message: body,
            },
            404 => SmoldumpError::NotFound {
                channel: channel.into(),
                message: body,
            },
            _ => SmoldumpError::UnexpectedStatus { status, body },
        }
    }

    /// Returns `true` if the remote rejected the credential.
    pub fn is_authentication(&self) -> bool {
        matches!(self, SmoldumpError::Authentication { .. })
    }

    /// Returns `true` if the channel was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SmoldumpError::NotFound { .. })
    }

    /// Returns `true` for network and HTTP level failures.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            SmoldumpError::Transport { .. } | SmoldumpError::UnexpectedStatus { .. }
        )
    }

    /// Returns `true` for invalid or missing parameters.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            SmoldumpError::Config { .. } | SmoldumpError::InvalidSnowflake { .. }
        )
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, SmoldumpError::Io(_))
    }
}
