pub mod auth;
pub mod catalog;
pub mod chat;
pub mod providers;
pub mod tui;

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use moodsync_llms::{ChatProvider, GeminiProvider, GroqProvider};
use moodsync_wellness::config::ChatProviderKind;
use tracing::warn;

/// Resolve the provider choice: flag, then `MOODSYNC_PROVIDER`, then groq.
pub fn resolve_provider_kind(flag: Option<String>) -> ChatProviderKind {
    flag.or_else(|| std::env::var("MOODSYNC_PROVIDER").ok())
        .and_then(|value| ChatProviderKind::from_str(&value).ok())
        .unwrap_or_default()
}

/// Build the chosen provider from the environment. A missing API key does not
/// abort — the relay degrades to the provider's fallback string, matching the
/// web client's behavior when its key env was absent.
pub fn build_provider(kind: ChatProviderKind) -> Arc<dyn ChatProvider> {
    let built: Result<Arc<dyn ChatProvider>, moodsync_llms::Error> = match kind {
        ChatProviderKind::Groq => GroqProvider::from_env().map(|p| Arc::new(p) as _),
        ChatProviderKind::Gemini => GeminiProvider::from_env().map(|p| Arc::new(p) as _),
    };
    match built {
        Ok(provider) => provider,
        Err(error) => {
            warn!(%error, provider = %kind, "provider not configured; chat will answer with its fallback text");
            Arc::new(UnconfiguredProvider { kind })
        }
    }
}

/// Stand-in for a provider whose API key is not set: every call fails, so the
/// relay surfaces the provider's fixed fallback string.
struct UnconfiguredProvider {
    kind: ChatProviderKind,
}

#[async_trait]
impl ChatProvider for UnconfiguredProvider {
    fn provider_id(&self) -> &str {
        self.kind.as_str()
    }

    fn model(&self) -> &str {
        "unconfigured"
    }

    fn fallback_text(&self) -> &'static str {
        match self.kind {
            ChatProviderKind::Groq => "Oops, I couldn't fetch a response from Groq.",
            ChatProviderKind::Gemini => "Sorry, I'm having trouble responding right now.",
        }
    }

    async fn complete(&self, _input: &str) -> moodsync_llms::Result<String> {
        Err(moodsync_llms::Error::MissingApiKey(
            self.kind.as_str().to_string(),
        ))
    }
}
