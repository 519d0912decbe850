//! Mock identity provider
//!
//! Logs dispatches instead of emailing anyone and accepts a fixed code.
//! Used in development and in host-level tests where the real provider is
//! out of reach.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use vw_core::errors::ProviderError;
use vw_core::services::verification::OtpProvider;
use vw_shared::utils::email::mask_email;

/// Default code the mock accepts
pub const MOCK_ACCEPTED_CODE: &str = "000000";

/// Mock provider for development and testing
#[derive(Clone)]
pub struct MockOtpProvider {
    /// The one code `verify_code` accepts
    accepted_code: String,
    /// Counter for tracking dispatched codes
    send_count: Arc<AtomicU64>,
    /// Whether to simulate send failures
    simulate_send_failure: bool,
    /// Whether to print dispatches to the console
    console_output: bool,
}

impl MockOtpProvider {
    /// Create a mock that accepts [`MOCK_ACCEPTED_CODE`]
    pub fn new() -> Self {
        Self {
            accepted_code: MOCK_ACCEPTED_CODE.to_string(),
            send_count: Arc::new(AtomicU64::new(0)),
            simulate_send_failure: false,
            console_output: true,
        }
    }

    /// Create a mock with configurable options
    pub fn with_options(accepted_code: impl Into<String>, console_output: bool) -> Self {
        Self {
            accepted_code: accepted_code.into(),
            send_count: Arc::new(AtomicU64::new(0)),
            simulate_send_failure: false,
            console_output,
        }
    }

    /// Enable or disable send-failure simulation
    pub fn set_simulate_send_failure(&mut self, simulate: bool) {
        self.simulate_send_failure = simulate;
    }

    /// Number of codes dispatched so far
    pub fn send_count(&self) -> u64 {
        self.send_count.load(Ordering::SeqCst)
    }
}

impl Default for MockOtpProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OtpProvider for MockOtpProvider {
    async fn send_code(&self, email: &str) -> Result<(), ProviderError> {
        if self.simulate_send_failure {
            warn!(
                email = %mask_email(email),
                event = "mock_send_failed",
                "Mock provider simulating a send failure"
            );
            return Err(ProviderError::Other("Simulated send failure".to_string()));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.send_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK OTP PROVIDER - DISPATCH #{}", count);
            println!("To: {}", email);
            println!("Code: {}", self.accepted_code);
            println!("Message ID: {}", message_id);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "otp_provider",
            provider = "mock",
            email = %mask_email(email),
            message_id = %message_id,
            event = "mock_code_sent",
            "One-time code dispatched (mock)"
        );

        // Simulate network delay
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(())
    }

    async fn verify_code(&self, email: &str, code: &str) -> Result<(), ProviderError> {
        if code == self.accepted_code {
            info!(
                email = %mask_email(email),
                event = "mock_code_accepted",
                "One-time code accepted (mock)"
            );
            Ok(())
        } else {
            Err(ProviderError::CodeInvalid)
        }
    }
}
