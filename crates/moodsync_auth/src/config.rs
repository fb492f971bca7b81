//! Configuration for the credential service client.

/// Configuration for connecting to the auth service.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// API base URL (e.g. "http://127.0.0.1:5000/api")
    pub base_url: String,
}

impl AuthConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://127.0.0.1:5000/api";

    /// Create config from environment.
    ///
    /// Optional: `MOODSYNC_AUTH_URL` (default: http://127.0.0.1:5000/api)
    pub fn from_env() -> Self {
        let base_url = std::env::var("MOODSYNC_AUTH_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}
