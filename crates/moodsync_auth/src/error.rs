//! Error types for auth operations.

use thiserror::Error;

/// Errors from the credential service or token store.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Configuration error (bad base URL, missing home dir)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The server rejected the request; the message is surfaced verbatim.
    #[error("{0}")]
    Rejected(String),

    /// Transport-level failure
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Token file I/O failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;
