//! # Infrastructure Layer
//!
//! Concrete adapters behind the `vw_core` provider seam:
//! - **HTTP**: client for the hosted identity provider that issues and
//!   validates one-time codes
//! - **Mock**: console-logging provider for development and tests
//! - **Telemetry**: tracing bootstrap driven by the shared logging config

pub mod provider;
pub mod telemetry;

use thiserror::Error;

pub use provider::{HttpOtpProvider, MockOtpProvider};

/// Errors raised while constructing infrastructure services
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    Http(String),
}
