//! Configuration for the verification flow

use vw_shared::config::VerificationConfig;

use crate::domain::entities::session::{
    CODE_LENGTH, DEFAULT_CODE_EXPIRY_SECONDS, DEFAULT_RESEND_COOLDOWN_SECONDS,
};

/// Configuration for the verification flow, read at session-open time
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// Number of digits the provider puts in a code
    pub code_length: usize,
    /// Minimum seconds between code resend requests
    pub resend_cooldown_seconds: u32,
    /// Seconds counted down before a code is displayed as stale
    pub code_expiry_seconds: u32,
    /// Allow consumer email providers
    pub allow_personal_emails: bool,
    /// Skip the whole flow and redirect immediately (testing only)
    pub testing_bypass: bool,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            code_length: CODE_LENGTH,
            resend_cooldown_seconds: DEFAULT_RESEND_COOLDOWN_SECONDS,
            code_expiry_seconds: DEFAULT_CODE_EXPIRY_SECONDS,
            allow_personal_emails: false,
            testing_bypass: false,
        }
    }
}

impl From<VerificationConfig> for FlowConfig {
    fn from(config: VerificationConfig) -> Self {
        Self {
            code_length: config.code_length,
            resend_cooldown_seconds: config.resend_cooldown_seconds,
            code_expiry_seconds: config.code_expiry_seconds,
            allow_personal_emails: config.allow_personal_emails,
            testing_bypass: config.disable_for_testing,
        }
    }
}
