//! Traits for remote provider and host integration

use async_trait::async_trait;

use crate::errors::ProviderError;
use super::types::RedirectTarget;

/// Remote identity provider that issues and validates one-time codes
///
/// Send errors are surfaced to the user verbatim, so adapters should return
/// [`ProviderError::Other`] with the provider's own message on that path.
/// Verify errors drive recovery behavior and should be classified
/// (structured codes where the provider has them, `ProviderError::classify`
/// otherwise).
#[async_trait]
pub trait OtpProvider: Send + Sync {
    /// Email a one-time code to the address
    async fn send_code(&self, email: &str) -> Result<(), ProviderError>;

    /// Check a candidate code for the address
    async fn verify_code(&self, email: &str, code: &str) -> Result<(), ProviderError>;
}

/// Host-side effects of the verification flow
///
/// The flow decides *when* these happen; the host decides *how*.
pub trait FlowHost: Send + Sync {
    /// Called exactly once when verification succeeds, before the redirect
    fn on_verified(&self);

    /// Take the user to the given surface
    fn navigate(&self, target: RedirectTarget);
}
