//! Groq-specific types

use serde::{Deserialize, Serialize};

/// Configuration for the Groq provider
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL (default: https://api.groq.com/openai/v1/)
    pub base_url: String,
    /// Model identifier
    pub model: String,
}

impl GroqConfig {
    pub const DEFAULT_MODEL: &'static str = "meta-llama/llama-4-scout-17b-16e-instruct";

    /// Create new config with API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api.groq.com/openai/v1/".to_string(),
            model: Self::DEFAULT_MODEL.to_string(),
        }
    }

    /// Set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        if !url.ends_with('/') {
            url.push('/');
        }
        self.base_url = url;
        self
    }

    /// Set model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Groq chat completion request
#[derive(Debug, Serialize)]
pub struct GroqRequest {
    pub model: String,
    pub messages: Vec<GroqMessage>,
}

/// Groq message
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GroqMessage {
    pub role: String,
    pub content: String,
}

/// Groq chat completion response
#[derive(Debug, Deserialize)]
pub struct GroqResponse {
    #[serde(default)]
    pub choices: Vec<GroqChoice>,
}

/// Groq response choice
#[derive(Debug, Deserialize)]
pub struct GroqChoice {
    pub message: GroqResponseMessage,
}

/// Groq response message
#[derive(Debug, Deserialize)]
pub struct GroqResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}
