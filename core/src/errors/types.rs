//! Error types for the verification flow.
//!
//! Display strings on `ErrorKind` and `EligibilityError` are the exact
//! sentences shown to the user. `ProviderError` is the structured error at
//! the provider boundary; adapters should return it directly when the
//! provider exposes error codes, and fall back to [`ProviderError::classify`]
//! when all they have is human-readable text. The state machine only ever
//! matches on the structured variants.

use thiserror::Error;

/// Why an email address is not eligible for code dispatch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EligibilityError {
    #[error("Please enter a valid email address")]
    InvalidFormat,

    #[error("Please use your work email address. Personal email providers are not allowed.")]
    PersonalProvider,
}

/// Failure recorded on the session and surfaced to the user
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Local precondition failure; never reaches the provider
    #[error("Code must be {expected} digits")]
    MalformedCode { expected: usize },

    /// The provider rejected the code as expired
    #[error("Verification code has expired. Please request a new one.")]
    Expired,

    /// The provider rejected the code as wrong
    #[error("Invalid verification code. Please check and try again.")]
    InvalidCode,

    /// The provider refused to send a code; message surfaced verbatim
    #[error("{0}")]
    DispatchFailed(String),

    /// Unclassified provider rejection; message surfaced verbatim
    #[error("{0}")]
    Unknown(String),
}

/// Error at the remote provider boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("verification code has expired")]
    CodeExpired,

    #[error("invalid verification code")]
    CodeInvalid,

    #[error("{0}")]
    Other(String),
}

impl ProviderError {
    /// Fallback classifier for providers that only return prose
    ///
    /// Matches on the lower-cased message, in order: "expired" wins over
    /// "invalid"/"otp"; anything else is passed through untouched.
    pub fn classify(message: impl Into<String>) -> Self {
        let message = message.into();
        let lowered = message.to_lowercase();
        if lowered.contains("expired") {
            ProviderError::CodeExpired
        } else if lowered.contains("invalid") || lowered.contains("otp") {
            ProviderError::CodeInvalid
        } else {
            ProviderError::Other(message)
        }
    }
}

impl From<ProviderError> for ErrorKind {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::CodeExpired => ErrorKind::Expired,
            ProviderError::CodeInvalid => ErrorKind::InvalidCode,
            ProviderError::Other(message) => ErrorKind::Unknown(message),
        }
    }
}
