//! Shared utilities and common types for the VeriWork services
//!
//! This crate provides common functionality used across all workspace members:
//! - Configuration types for the verification flow and the remote provider
//! - Environment detection and logging configuration
//! - Utility functions (email syntax checking, masking for logs)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{Environment, LoggingConfig, ProviderConfig, VerificationConfig};
pub use utils::email;
