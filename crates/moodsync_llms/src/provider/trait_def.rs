//! The [ChatProvider] trait — the seam every chat backend satisfies.

use async_trait::async_trait;

use crate::error::Result;

/// A stateless chat completion backend.
///
/// `complete` forwards the input as the sole user message of one request (no
/// conversation context is ever sent) and returns the first completion's
/// text. `fallback_text` is the fixed string shown when the call fails.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Stable provider ID (e.g. "groq", "gemini").
    fn provider_id(&self) -> &str;

    /// Model identifier sent with each request.
    fn model(&self) -> &str;

    /// Fixed string surfaced in place of a reply on any failure.
    fn fallback_text(&self) -> &'static str;

    /// One stateless completion call.
    async fn complete(&self, input: &str) -> Result<String>;
}
