//! moodsync_llms — provider-agnostic chat relay.
//!
//! Each provider sends the user's text as the sole message of a stateless
//! completion request and returns the first completion's text. [ChatRelay]
//! wraps a provider and never fails: transport or parsing failures collapse
//! to the provider's fixed fallback string, which the UI shows verbatim.
//!
//! ```rust,no_run
//! use moodsync_llms::{ChatRelay, GroqProvider};
//!
//! let provider = GroqProvider::from_env().unwrap();
//! let relay = ChatRelay::new(provider);
//! # let _ = relay;
//! ```

pub mod error;
pub mod provider;
pub mod providers;
pub mod relay;

#[cfg(test)]
mod tests;

// Re-export core abstractions
pub use error::{Error, Result};
pub use provider::{ChatProvider, ProviderRegistry};
pub use relay::ChatRelay;

// Re-export provider implementations
pub use providers::GeminiProvider;
pub use providers::GroqProvider;
