//! Gemini-specific types

use serde::{Deserialize, Serialize};

/// Configuration for the Gemini provider
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key (sent as the `key` query parameter)
    pub api_key: String,
    /// Base URL (default: https://generativelanguage.googleapis.com/v1beta/)
    pub base_url: String,
    /// Model path, including the "models/" prefix
    pub model: String,
}

impl GeminiConfig {
    pub const DEFAULT_MODEL: &'static str = "models/gemini-pro";

    /// Create new config with API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta/".to_string(),
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

    /// Set model path
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Gemini generateContent request
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
}

/// One content block (request or response side)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeminiPart {
    pub text: String,
}

/// Gemini generateContent response
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    pub content: GeminiContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let request = GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: "Help me with breathing exercises".to_string(),
                }],
            }],
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""role":"user""#));
        assert!(json.contains(r#""parts":[{"text":"Help me with breathing exercises"}]"#));
    }

    #[test]
    fn test_response_parses_candidate_text() {
        let json = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Inhale slowly."}]}}]}"#;
        let response: GeminiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.candidates[0].content.parts[0].text, "Inhale slowly.");
    }

    #[test]
    fn test_response_tolerates_no_candidates() {
        let response: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert!(response.candidates.is_empty());
    }
}
