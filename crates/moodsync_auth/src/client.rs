//! Credential service client — one request per operation, no retries.

use reqwest::Client;
use tracing::debug;

use crate::config::AuthConfig;
use crate::error::{AuthError, Result};
use crate::token::TokenStore;
use crate::types::{
    ErrorBody, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};

/// Client for the external auth service.
///
/// Each operation issues exactly one request and either returns the parsed
/// success body or surfaces the server's `{message}` (falling back to a fixed
/// generic string when the body carries none).
#[derive(Clone)]
pub struct AuthClient {
    config: AuthConfig,
    http: Client,
}

impl AuthClient {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(AuthConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// POST `{base}/register`.
    pub async fn register(
        &self,
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<RegisterResponse> {
        let url = format!("{}/register", self.config.base_url);
        let body = RegisterRequest {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        };
        debug!(url = %url, "register request");
        let response = self.http.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(rejected(response, "Registration failed").await);
        }
        Ok(response.json().await?)
    }

    /// POST `{base}/login`.
    pub async fn login(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<LoginResponse> {
        let url = format!("{}/login", self.config.base_url);
        let body = LoginRequest {
            email: email.into(),
            password: password.into(),
        };
        debug!(url = %url, "login request");
        let response = self.http.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            return Err(rejected(response, "Login failed").await);
        }
        Ok(response.json().await?)
    }

    /// Register, then immediately log in and persist the token — the
    /// registration flow of the original client.
    pub async fn register_and_login(
        &self,
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        store: &TokenStore,
    ) -> Result<LoginResponse> {
        let email = email.into();
        let password = password.into();
        self.register(username, email.clone(), password.clone())
            .await?;
        let login = self.login(email, password).await?;
        store.save(&login.token)?;
        Ok(login)
    }
}

/// Map a non-2xx response to [AuthError::Rejected] with the server message
/// when present, else the given generic string.
async fn rejected(response: reqwest::Response, generic: &str) -> AuthError {
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| generic.to_string());
    AuthError::Rejected(message)
}
