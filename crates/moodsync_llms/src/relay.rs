//! The chat relay: wraps a provider, never fails.

use std::sync::Arc;

use tracing::warn;

use crate::provider::ChatProvider;

/// Forwards free-text input to a [ChatProvider] and collapses any failure to
/// the provider's fixed fallback string. Each call is stateless from the
/// remote endpoint's perspective; the UI keeps the running transcript.
#[derive(Clone)]
pub struct ChatRelay {
    provider: Arc<dyn ChatProvider>,
}

impl ChatRelay {
    pub fn new<P: ChatProvider + 'static>(provider: P) -> Self {
        Self {
            provider: Arc::new(provider),
        }
    }

    pub fn from_arc(provider: Arc<dyn ChatProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_id(&self) -> String {
        self.provider.provider_id().to_string()
    }

    /// Relay one message. Always returns display text.
    pub async fn send(&self, input: &str) -> String {
        match self.provider.complete(input).await {
            Ok(text) => text,
            Err(error) => {
                warn!(provider = %self.provider.provider_id(), %error, "chat relay failed");
                self.provider.fallback_text().to_string()
            }
        }
    }
}
