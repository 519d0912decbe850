//! HTTP adapter for the hosted identity provider
//!
//! The provider owns code generation, storage, and validity checking; this
//! adapter only moves requests and maps failures onto the structured
//! [`ProviderError`] the core flow understands. Send failures keep the
//! provider's own wording; verify failures go through the classification
//! fallback because this API reports them as prose.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, info};

use vw_core::errors::ProviderError;
use vw_core::services::verification::OtpProvider;
use vw_shared::config::ProviderConfig;
use vw_shared::utils::email::mask_email;

use crate::InfraError;

/// Identity provider client speaking the hosted auth API
pub struct HttpOtpProvider {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl HttpOtpProvider {
    /// Create a new provider client
    ///
    /// Fails when the endpoint or key is missing so a misconfigured
    /// deployment surfaces at startup, not at first send.
    pub fn new(config: ProviderConfig) -> Result<Self, InfraError> {
        if !config.is_configured() {
            return Err(InfraError::Config(
                "identity provider requires AUTH_PROVIDER_URL and AUTH_PROVIDER_KEY".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| InfraError::Http(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            event = "provider_client_ready",
            "Identity provider client initialized"
        );
        Ok(Self { client, config })
    }

    /// Create from environment variables (loads `.env` first)
    pub fn from_env() -> Result<Self, InfraError> {
        dotenvy::dotenv().ok();
        Self::new(ProviderConfig::from_env())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn post(&self, path: &str, body: Value) -> Result<(), ProviderError> {
        let url = self.endpoint(path);
        let response = self
            .client
            .post(&url)
            .header("apikey", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Other(format!("Request to identity provider failed: {e}")))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(status, &body);
        debug!(
            status = status.as_u16(),
            event = "provider_rejection",
            "Identity provider returned an error"
        );
        Err(ProviderError::Other(message))
    }
}

#[async_trait]
impl OtpProvider for HttpOtpProvider {
    async fn send_code(&self, email: &str) -> Result<(), ProviderError> {
        info!(
            email = %mask_email(email),
            event = "provider_send",
            "Dispatching one-time code"
        );
        self.post("otp", json!({ "email": email, "create_user": true }))
            .await
    }

    async fn verify_code(&self, email: &str, code: &str) -> Result<(), ProviderError> {
        info!(
            email = %mask_email(email),
            event = "provider_verify",
            "Checking one-time code"
        );
        self.post(
            "verify",
            json!({ "email": email, "token": code, "type": "email" }),
        )
        .await
        // This API reports verify failures as prose; classify them so the
        // flow can tell an expired code from a wrong one.
        .map_err(|err| match err {
            ProviderError::Other(message) => ProviderError::classify(message),
            structured => structured,
        })
    }
}

/// Pull a human-readable message out of an error response body
///
/// The API uses `msg`, `error_description`, or `message` depending on the
/// endpoint; fall back to the raw body, then to the HTTP status.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["msg", "error_description", "message"] {
            if let Some(message) = value.get(key).and_then(Value::as_str) {
                return message.to_string();
            }
        }
    }
    if !body.trim().is_empty() {
        return body.trim().to_string();
    }
    format!("identity provider returned HTTP {}", status.as_u16())
}
