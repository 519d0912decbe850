//! Domain-specific error types and error handling.

mod types;

// Re-export all error types and utilities
pub use types::{EligibilityError, ErrorKind, ProviderError};

/// Result alias for flow operations
pub type FlowResult<T> = Result<T, ErrorKind>;
