//! # VeriWork Core
//!
//! Core business logic and domain layer for the VeriWork email verification
//! flow. This crate contains the verification state machine, domain entities,
//! eligibility policy, diagnostics, and error types; concrete provider
//! adapters live in `vw_infra`.

pub mod clock;
pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use domain::*;
pub use errors::*;
pub use services::*;
