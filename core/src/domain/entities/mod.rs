//! Domain entities representing core business objects.

pub mod code_entry;
pub mod session;

// Re-export commonly used types
pub use code_entry::CodeEntry;
pub use session::{
    format_countdown, SessionPhase, VerificationSession, CODE_LENGTH,
    DEFAULT_CODE_EXPIRY_SECONDS, DEFAULT_RESEND_COOLDOWN_SECONDS,
};
