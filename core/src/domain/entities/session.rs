//! Verification session entity for the email-OTP flow.

use chrono::{DateTime, Utc};

use crate::domain::value_objects::eligibility::Eligibility;
use crate::errors::ErrorKind;

/// Number of digits in a one-time code
pub const CODE_LENGTH: usize = 6;

/// Default minimum wait between code resend requests
pub const DEFAULT_RESEND_COOLDOWN_SECONDS: u32 = 3600;

/// Default client-side countdown until a dispatched code is shown as stale
pub const DEFAULT_CODE_EXPIRY_SECONDS: u32 = 3600;

/// Phase of the verification flow, driving which sub-view the host shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for an eligible email address
    CollectingEmail,
    /// A code was dispatched; waiting for the user to enter it
    CodeSent,
    /// A verify call is in flight. Never stored on the session; reported
    /// by the flow while the call is outstanding.
    Verifying,
    /// Terminal: the provider accepted the code
    Verified,
}

/// State of one pass through the email verification flow
///
/// Owned exclusively by the state machine, recreated each time the
/// verification surface is opened, and discarded on close or success.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationSession {
    /// Candidate address; empty until the user types one
    pub email: String,

    /// Derived from `email` on every change, never set directly
    pub eligibility: Eligibility,

    /// Current phase (see [`SessionPhase`])
    pub phase: SessionPhase,

    /// Candidate code, digits only, at most the configured length
    pub code: String,

    /// Seconds until "Resend" becomes available again
    pub resend_cooldown_seconds: u32,

    /// Seconds until the dispatched code is displayed as stale. Advisory:
    /// the provider enforces the real validity window at verify time.
    pub code_expiry_seconds: u32,

    /// When the last code was dispatched
    pub sent_at: Option<DateTime<Utc>>,

    /// Most recent failure, cleared by the next state-changing operation
    pub last_error: Option<ErrorKind>,
}

impl VerificationSession {
    /// Create a fresh session in the initial phase
    pub fn new() -> Self {
        Self {
            email: String::new(),
            eligibility: Eligibility::Unvalidated,
            phase: SessionPhase::CollectingEmail,
            code: String::new(),
            resend_cooldown_seconds: 0,
            code_expiry_seconds: 0,
            sent_at: None,
            last_error: None,
        }
    }

    /// Start both countdowns from a dispatch event
    ///
    /// The two windows are independent in magnitude but always start
    /// together.
    pub fn arm_timers(&mut self, cooldown_seconds: u32, expiry_seconds: u32) {
        self.resend_cooldown_seconds = cooldown_seconds;
        self.code_expiry_seconds = expiry_seconds;
    }

    /// Advance both countdowns by one elapsed second, each floored at zero
    ///
    /// Ticking never changes the phase: an expiry hitting zero is
    /// display-only, the authoritative check happens at verify time.
    pub fn tick(&mut self) {
        self.resend_cooldown_seconds = self.resend_cooldown_seconds.saturating_sub(1);
        self.code_expiry_seconds = self.code_expiry_seconds.saturating_sub(1);
    }

    /// Stop both countdowns
    pub fn clear_timers(&mut self) {
        self.resend_cooldown_seconds = 0;
        self.code_expiry_seconds = 0;
    }

    /// Whether the candidate code has the full required length
    pub fn is_code_complete(&self, required_digits: usize) -> bool {
        self.code.len() == required_digits
    }

    /// Whether the client-side countdown for the dispatched code ran out
    pub fn code_expired(&self) -> bool {
        self.sent_at.is_some() && self.code_expiry_seconds == 0
    }

    /// Whether a new code may be requested right now
    pub fn can_resend(&self) -> bool {
        self.phase == SessionPhase::CodeSent && self.resend_cooldown_seconds == 0
    }
}

impl Default for VerificationSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a countdown as `m:ss` for display
///
/// # Examples
///
/// ```
/// use vw_core::domain::entities::session::format_countdown;
///
/// assert_eq!(format_countdown(75), "1:15");
/// assert_eq!(format_countdown(3600), "60:00");
/// ```
pub fn format_countdown(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_initial_invariants() {
        let session = VerificationSession::new();
        assert_eq!(session.phase, SessionPhase::CollectingEmail);
        assert_eq!(session.email, "");
        assert_eq!(session.code, "");
        assert_eq!(session.eligibility, Eligibility::Unvalidated);
        assert_eq!(session.resend_cooldown_seconds, 0);
        assert_eq!(session.code_expiry_seconds, 0);
        assert!(session.sent_at.is_none());
        assert!(session.last_error.is_none());
    }

    #[test]
    fn test_arm_timers_independent_magnitudes() {
        let mut session = VerificationSession::new();
        session.arm_timers(60, 3600);
        assert_eq!(session.resend_cooldown_seconds, 60);
        assert_eq!(session.code_expiry_seconds, 3600);
    }

    #[test]
    fn test_tick_decrements_both_counters() {
        let mut session = VerificationSession::new();
        session.arm_timers(2, 5);

        session.tick();
        assert_eq!(session.resend_cooldown_seconds, 1);
        assert_eq!(session.code_expiry_seconds, 4);
    }

    #[test]
    fn test_tick_floors_at_zero() {
        let mut session = VerificationSession::new();
        session.arm_timers(2, 4);

        for _ in 0..10 {
            session.tick();
        }
        assert_eq!(session.resend_cooldown_seconds, 0);
        assert_eq!(session.code_expiry_seconds, 0);
    }

    #[test]
    fn test_tick_never_changes_phase() {
        let mut session = VerificationSession::new();
        session.phase = SessionPhase::CodeSent;
        session.sent_at = Some(Utc::now());
        session.arm_timers(1, 1);

        session.tick();
        session.tick();
        assert_eq!(session.phase, SessionPhase::CodeSent);
        assert!(session.code_expired());
    }

    #[test]
    fn test_can_resend_requires_cooldown_elapsed() {
        let mut session = VerificationSession::new();
        assert!(!session.can_resend()); // wrong phase

        session.phase = SessionPhase::CodeSent;
        session.arm_timers(1, 10);
        assert!(!session.can_resend());

        session.tick();
        assert!(session.can_resend());
    }

    #[test]
    fn test_is_code_complete() {
        let mut session = VerificationSession::new();
        session.code = "12345".to_string();
        assert!(!session.is_code_complete(6));

        session.code.push('6');
        assert!(session.is_code_complete(6));
    }

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(0), "0:00");
        assert_eq!(format_countdown(9), "0:09");
        assert_eq!(format_countdown(75), "1:15");
        assert_eq!(format_countdown(3599), "59:59");
    }
}
