//! Inspect chat providers.

use moodsync_llms::providers::gemini::GeminiConfig;
use moodsync_llms::providers::groq::GroqConfig;
use moodsync_llms::{GeminiProvider, GroqProvider};

use crate::cli::ProvidersAction;
use crate::output;

fn configured(env: &str) -> &'static str {
    match std::env::var(env) {
        Ok(value) if !value.is_empty() => "yes",
        _ => "no",
    }
}

pub fn run(action: ProvidersAction) -> anyhow::Result<()> {
    match action {
        ProvidersAction::List => {
            output::table(
                &["ID", "Model", "Env", "Configured"],
                vec![
                    vec![
                        "groq".to_string(),
                        GroqConfig::DEFAULT_MODEL.to_string(),
                        GroqProvider::API_KEY_ENV.to_string(),
                        configured(GroqProvider::API_KEY_ENV).to_string(),
                    ],
                    vec![
                        "gemini".to_string(),
                        GeminiConfig::DEFAULT_MODEL.to_string(),
                        GeminiProvider::API_KEY_ENV.to_string(),
                        configured(GeminiProvider::API_KEY_ENV).to_string(),
                    ],
                ],
            );
            Ok(())
        }
    }
}
