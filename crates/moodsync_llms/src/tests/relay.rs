use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::provider::ChatProvider;
use crate::providers::groq::GroqConfig;
use crate::relay::ChatRelay;
use crate::GroqProvider;

struct FixedProvider {
    reply: Option<&'static str>,
}

#[async_trait]
impl ChatProvider for FixedProvider {
    fn provider_id(&self) -> &str {
        "fixed"
    }

    fn model(&self) -> &str {
        "fixed-model"
    }

    fn fallback_text(&self) -> &'static str {
        "fixed fallback"
    }

    async fn complete(&self, _input: &str) -> Result<String> {
        match self.reply {
            Some(text) => Ok(text.to_string()),
            None => Err(Error::Provider("down".to_string())),
        }
    }
}

#[tokio::test]
async fn test_relay_passes_through_reply() {
    let relay = ChatRelay::new(FixedProvider {
        reply: Some("breathe in for four counts"),
    });
    assert_eq!(relay.send("help").await, "breathe in for four counts");
}

#[tokio::test]
async fn test_relay_collapses_error_to_fallback() {
    let relay = ChatRelay::new(FixedProvider { reply: None });
    assert_eq!(relay.send("help").await, "fixed fallback");
}

#[tokio::test]
async fn test_groq_empty_choices_yields_literal() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let provider =
        GroqProvider::new(GroqConfig::new("test-key").with_base_url(server.url())).unwrap();
    let text = provider.complete("hi").await.unwrap();
    assert_eq!(text, "No response from Groq AI.");
}

#[tokio::test]
async fn test_groq_http_error_hits_relay_fallback() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_body(r#"{"error":{"message":"Invalid API Key"}}"#)
        .create_async()
        .await;

    let provider =
        GroqProvider::new(GroqConfig::new("bad-key").with_base_url(server.url())).unwrap();
    let relay = ChatRelay::new(provider);
    assert_eq!(
        relay.send("hi").await,
        "Oops, I couldn't fetch a response from Groq."
    );
}

#[tokio::test]
async fn test_groq_completion_roundtrip() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_body(
            r#"{"choices":[{"message":{"role":"assistant","content":"You've got this."}}]}"#,
        )
        .create_async()
        .await;

    let provider =
        GroqProvider::new(GroqConfig::new("test-key").with_base_url(server.url())).unwrap();
    let relay = ChatRelay::new(provider);
    assert_eq!(relay.send("hi").await, "You've got this.");
}
