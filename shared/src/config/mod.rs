//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection and logging configuration
//! - `provider` - Remote identity provider endpoint and credentials
//! - `verification` - Verification flow tuning (durations, digit length, flags)

pub mod environment;
pub mod provider;
pub mod verification;

// Re-export commonly used types
pub use environment::{Environment, LoggingConfig};
pub use provider::ProviderConfig;
pub use verification::VerificationConfig;
