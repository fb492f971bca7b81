//! Error types for the chat relay.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// API key env var not set or empty
    #[error("missing API key for provider: {0}")]
    MissingApiKey(String),

    /// No provider registered under the requested ID
    #[error("provider not found: {0}")]
    ProviderNotFound(String),

    /// Non-2xx response or malformed completion from the remote endpoint
    #[error("provider error: {0}")]
    Provider(String),

    /// Transport-level failure
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Serialization failure
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn provider_error(message: impl Into<String>) -> Self {
        Error::Provider(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
