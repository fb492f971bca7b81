//! Groq provider implementation

use async_trait::async_trait;
use reqwest::Client;

use super::types::{GroqConfig, GroqMessage, GroqRequest, GroqResponse};
use crate::error::{Error, Result};
use crate::provider::ChatProvider;

/// Groq provider
pub struct GroqProvider {
    config: GroqConfig,
    client: Client,
}

impl GroqProvider {
    /// Environment variable for API key
    pub const API_KEY_ENV: &'static str = "GROQ_API_KEY";

    /// Shown when the endpoint answers without a usable completion.
    pub const EMPTY_COMPLETION_TEXT: &'static str = "No response from Groq AI.";

    /// Create a new Groq provider
    pub fn new(config: GroqConfig) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(Error::MissingApiKey("groq".to_string()));
        }

        let client = Client::new();
        Ok(Self { config, client })
    }

    /// Create provider from environment
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(Self::API_KEY_ENV)
            .map_err(|_| Error::MissingApiKey("groq".to_string()))?;

        Self::new(GroqConfig::new(api_key))
    }
}

#[async_trait]
impl ChatProvider for GroqProvider {
    fn provider_id(&self) -> &str {
        "groq"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    fn fallback_text(&self) -> &'static str {
        "Oops, I couldn't fetch a response from Groq."
    }

    async fn complete(&self, input: &str) -> Result<String> {
        let url = format!("{}chat/completions", self.config.base_url);
        let request = GroqRequest {
            model: self.config.model.clone(),
            messages: vec![GroqMessage {
                role: "user".to_string(),
                content: input.to_string(),
            }],
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(Error::provider_error(format!(
                "Groq API error {}: {}",
                status, error_text
            )));
        }

        let groq_response: GroqResponse = response.json().await?;
        let text = groq_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .unwrap_or_else(|| Self::EMPTY_COMPLETION_TEXT.to_string());
        Ok(text)
    }
}
