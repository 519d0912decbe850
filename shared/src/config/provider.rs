//! Remote identity provider configuration
//!
//! The provider issues, stores, and validates one-time codes; this crate only
//! needs to know where it lives and how to authenticate against it.

use serde::{Deserialize, Serialize};

/// Configuration for the hosted identity provider
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// Base URL of the provider, e.g. `https://auth.example.com`
    pub base_url: String,

    /// Public API key sent with every request
    pub api_key: String,

    /// Timeout for API requests in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ProviderConfig {
    /// Create a new provider configuration
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            request_timeout_secs: default_request_timeout(),
        }
    }

    /// Create configuration from environment variables
    ///
    /// Reads `AUTH_PROVIDER_URL`, `AUTH_PROVIDER_KEY`, and the optional
    /// `AUTH_PROVIDER_TIMEOUT_SECS`. Missing variables yield an
    /// unconfigured instance; callers decide whether that is fatal.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("AUTH_PROVIDER_URL").unwrap_or_default(),
            api_key: std::env::var("AUTH_PROVIDER_KEY").unwrap_or_default(),
            request_timeout_secs: std::env::var("AUTH_PROVIDER_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_request_timeout),
        }
    }

    /// Whether both the endpoint and the API key are present
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && !self.api_key.is_empty()
    }
}

fn default_request_timeout() -> u64 {
    30
}
