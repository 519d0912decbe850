//! Business services containing domain logic and use cases.

pub mod diagnostics;
pub mod verification;

// Re-export commonly used types
pub use diagnostics::{DiagnosticsReporter, DiagnosticsSnapshot, SendLog};
pub use verification::{
    FlowConfig, FlowHost, OtpProvider, RedirectTarget, VerificationFlow, VerificationMode,
};
