use crate::error::Error;
use crate::provider::{ChatProvider, ProviderRegistry};
use async_trait::async_trait;

/// Mock provider for testing
struct MockProvider {
    id: &'static str,
}

#[async_trait]
impl ChatProvider for MockProvider {
    fn provider_id(&self) -> &str {
        self.id
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    fn fallback_text(&self) -> &'static str {
        "mock fallback"
    }

    async fn complete(&self, _input: &str) -> crate::error::Result<String> {
        Err(Error::Provider("mock".to_string()))
    }
}

#[test]
fn test_register_and_get_provider() {
    let registry = ProviderRegistry::new().register("test", MockProvider { id: "test" });

    let provider = registry.get_provider("test");
    assert!(provider.is_ok());
    assert_eq!(provider.unwrap().provider_id(), "test");
}

#[test]
fn test_provider_not_found() {
    let registry = ProviderRegistry::new();
    let result = registry.get_provider("nonexistent");
    assert!(result.is_err());
}

#[test]
fn test_list_providers() {
    let registry = ProviderRegistry::new()
        .register("groq", MockProvider { id: "groq" })
        .register("gemini", MockProvider { id: "gemini" });

    let mut ids = registry.list_providers();
    ids.sort();
    assert_eq!(ids, vec!["gemini", "groq"]);
}
