//! Verification flow configuration
//!
//! All timing knobs of the email verification flow live here so hosts have a
//! single source of truth at session-open time; nothing else hard-codes a
//! duration.

use serde::{Deserialize, Serialize};

/// Configuration for the email verification flow
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Number of digits in a one-time code
    #[serde(default = "default_code_length")]
    pub code_length: usize,

    /// Minimum seconds between code resend requests
    #[serde(default = "default_window_seconds")]
    pub resend_cooldown_seconds: u32,

    /// Seconds the client counts down before treating a code as stale.
    /// Display-only; the provider enforces the real validity window.
    #[serde(default = "default_window_seconds")]
    pub code_expiry_seconds: u32,

    /// Allow consumer email providers (gmail.com and friends)
    #[serde(default)]
    pub allow_personal_emails: bool,

    /// Skip the whole flow and redirect immediately (testing only)
    #[serde(default)]
    pub disable_for_testing: bool,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_length: default_code_length(),
            resend_cooldown_seconds: default_window_seconds(),
            code_expiry_seconds: default_window_seconds(),
            allow_personal_emails: false,
            disable_for_testing: false,
        }
    }
}

impl VerificationConfig {
    /// Create configuration from environment variables
    ///
    /// Boolean flags follow the convention of the deployment scripts: the
    /// literal string `true` enables them, anything else disables them.
    pub fn from_env() -> Self {
        Self {
            code_length: std::env::var("VERIFY_CODE_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_code_length),
            resend_cooldown_seconds: std::env::var("VERIFY_RESEND_COOLDOWN_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_window_seconds),
            code_expiry_seconds: std::env::var("VERIFY_CODE_EXPIRY_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_window_seconds),
            allow_personal_emails: env_flag("ALLOW_PERSONAL_EMAILS"),
            disable_for_testing: env_flag("DISABLE_AUTH_FOR_TESTING"),
        }
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name).map(|v| v == "true").unwrap_or(false)
}

fn default_code_length() -> usize {
    6
}

fn default_window_seconds() -> u32 {
    3600
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VerificationConfig::default();
        assert_eq!(config.code_length, 6);
        assert_eq!(config.resend_cooldown_seconds, 3600);
        assert_eq!(config.code_expiry_seconds, 3600);
        assert!(!config.allow_personal_emails);
        assert!(!config.disable_for_testing);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: VerificationConfig =
            serde_json::from_str(r#"{"resend_cooldown_seconds": 60}"#).unwrap();
        assert_eq!(config.resend_cooldown_seconds, 60);
        assert_eq!(config.code_expiry_seconds, 3600);
        assert_eq!(config.code_length, 6);
    }

    #[test]
    fn test_independent_windows() {
        let config: VerificationConfig = serde_json::from_str(
            r#"{"resend_cooldown_seconds": 60, "code_expiry_seconds": 3600}"#,
        )
        .unwrap();
        assert_ne!(config.resend_cooldown_seconds, config.code_expiry_seconds);
    }
}
