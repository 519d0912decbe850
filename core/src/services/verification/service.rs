//! Email verification flow state machine

use std::sync::{Arc, Mutex, MutexGuard};

use vw_shared::utils::email::mask_email;

use crate::clock::{Clock, SystemClock};
use crate::domain::entities::session::{SessionPhase, VerificationSession};
use crate::domain::value_objects::eligibility::check_eligibility;
use crate::errors::{ErrorKind, FlowResult};
use crate::services::diagnostics::SendLog;

use super::config::FlowConfig;
use super::traits::{FlowHost, OtpProvider};
use super::types::VerificationMode;

/// Mutable state behind the flow's lock
struct FlowState {
    session: VerificationSession,
    mode: VerificationMode,
    /// Bumped on every open/close; in-flight provider responses carrying a
    /// stale epoch are dropped instead of being applied to the new session
    epoch: u64,
    closed: bool,
    send_in_flight: bool,
    verify_in_flight: bool,
}

/// State machine orchestrating the email -> code -> verify lifecycle
///
/// All transitions happen in response to discrete external events: user
/// input, a once-per-second [`tick`](VerificationFlow::tick) from the host's
/// timing facility, or a resolved provider call. The flow never spawns
/// timers of its own, so tearing a session down cannot leak one.
pub struct VerificationFlow<P: OtpProvider, H: FlowHost> {
    provider: Arc<P>,
    host: Arc<H>,
    config: FlowConfig,
    clock: Arc<dyn Clock>,
    send_log: SendLog,
    state: Mutex<FlowState>,
}

impl<P: OtpProvider, H: FlowHost> VerificationFlow<P, H> {
    /// Create a new flow
    ///
    /// The flow starts torn down; call [`open`](VerificationFlow::open)
    /// when the verification surface is shown.
    pub fn new(provider: Arc<P>, host: Arc<H>, config: FlowConfig) -> Self {
        Self {
            provider,
            host,
            config,
            clock: Arc::new(SystemClock),
            send_log: SendLog::new(),
            state: Mutex::new(FlowState {
                session: VerificationSession::new(),
                mode: VerificationMode::default(),
                epoch: 0,
                closed: true,
                send_in_flight: false,
                verify_in_flight: false,
            }),
        }
    }

    /// Replace the wall clock (tests pass a [`ManualClock`](crate::clock::ManualClock))
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Share an existing send-timestamp record with this flow
    pub fn with_send_log(mut self, send_log: SendLog) -> Self {
        self.send_log = send_log;
        self
    }

    /// Handle to the send-timestamp record (for the diagnostics reporter)
    pub fn send_log(&self) -> SendLog {
        self.send_log.clone()
    }

    /// Open (or reopen) the verification surface
    ///
    /// Resets the session to its initial values and supersedes any provider
    /// call still in flight. With the testing bypass enabled the whole flow
    /// is skipped and the host is redirected immediately.
    pub fn open(&self, mode: VerificationMode) {
        {
            let mut st = self.state();
            st.epoch += 1;
            st.closed = false;
            st.mode = mode;
            st.send_in_flight = false;
            st.verify_in_flight = false;
            st.session = VerificationSession::new();
        }
        tracing::info!(mode = ?mode, event = "session_opened", "Verification session opened");

        if self.config.testing_bypass {
            tracing::warn!(
                event = "testing_bypass",
                "Verification disabled for testing; redirecting without a code"
            );
            self.host.navigate(mode.redirect_target());
        }
    }

    /// Tear the session down
    ///
    /// Future ticks and any in-flight provider response are ignored from
    /// this point on.
    pub fn close(&self) {
        let mut st = self.state();
        st.closed = true;
        st.epoch += 1;
        st.send_in_flight = false;
        st.verify_in_flight = false;
        st.session = VerificationSession::new();
        tracing::debug!(event = "session_closed", "Verification session closed");
    }

    /// Update the candidate email and re-run the eligibility check
    pub fn set_email(&self, input: &str) {
        let mut st = self.state();
        if st.closed {
            return;
        }
        st.session.email = input.to_string();
        st.session.eligibility = check_eligibility(input, self.config.allow_personal_emails);
        st.session.last_error = None;
    }

    /// Request a code for the current email
    ///
    /// No-op unless the session is collecting an email, the address is
    /// eligible, and no send is already in flight. On provider failure the
    /// phase is unchanged and nothing is scheduled.
    pub async fn request_code(&self) -> FlowResult<()> {
        let (email, epoch) = {
            let mut st = self.state();
            if st.closed
                || st.send_in_flight
                || st.session.phase != SessionPhase::CollectingEmail
                || !st.session.eligibility.is_valid()
            {
                return Ok(());
            }
            st.session.last_error = None;
            st.send_in_flight = true;
            (st.session.email.clone(), st.epoch)
        };

        tracing::info!(
            email = %mask_email(&email),
            event = "otp_send_requested",
            "Requesting verification code"
        );
        self.dispatch(email, epoch).await
    }

    /// Re-request a code for the email the last code went to
    ///
    /// No-op while the resend cooldown is running or a send is in flight.
    /// Clears the candidate code and any error first, then behaves like
    /// [`request_code`](VerificationFlow::request_code).
    pub async fn resend_code(&self) -> FlowResult<()> {
        let (email, epoch) = {
            let mut st = self.state();
            if st.closed
                || st.send_in_flight
                || st.session.phase != SessionPhase::CodeSent
                || st.session.resend_cooldown_seconds > 0
            {
                return Ok(());
            }
            st.session.code.clear();
            st.session.last_error = None;
            st.send_in_flight = true;
            (st.session.email.clone(), st.epoch)
        };

        tracing::info!(
            email = %mask_email(&email),
            event = "otp_resend_requested",
            "Resending verification code"
        );
        self.dispatch(email, epoch).await
    }

    /// Store a candidate code, sanitized to at most the configured number
    /// of digits
    ///
    /// Only meaningful while a code is out; a session still collecting the
    /// email keeps its code empty. When the stored code reaches the full
    /// length, a verify is triggered automatically; there is no explicit
    /// submit action.
    pub async fn set_code(&self, input: &str) -> FlowResult<()> {
        let should_verify = {
            let mut st = self.state();
            if st.closed || st.session.phase != SessionPhase::CodeSent {
                return Ok(());
            }
            let sanitized: String = input
                .chars()
                .filter(char::is_ascii_digit)
                .take(self.config.code_length)
                .collect();
            st.session.code = sanitized;
            !st.verify_in_flight && st.session.is_code_complete(self.config.code_length)
        };

        if should_verify {
            self.verify().await
        } else {
            Ok(())
        }
    }

    /// Submit the candidate code to the provider
    ///
    /// A malformed code fails locally without a network call. On provider
    /// success the host callback fires exactly once and the user is
    /// redirected per the session mode; on rejection the error is
    /// classified, the code is cleared for retry, and the phase stays at
    /// [`SessionPhase::CodeSent`].
    pub async fn verify(&self) -> FlowResult<()> {
        let (email, code, epoch) = {
            let mut st = self.state();
            if st.closed || st.verify_in_flight || st.session.phase != SessionPhase::CodeSent {
                return Ok(());
            }
            let code = st.session.code.clone();
            if code.len() != self.config.code_length
                || !code.chars().all(|c| c.is_ascii_digit())
            {
                let kind = ErrorKind::MalformedCode {
                    expected: self.config.code_length,
                };
                st.session.last_error = Some(kind.clone());
                return Err(kind);
            }
            st.verify_in_flight = true;
            (st.session.email.clone(), code, st.epoch)
        };

        tracing::info!(
            email = %mask_email(&email),
            event = "otp_verify_requested",
            "Submitting verification code"
        );
        let result = self.provider.verify_code(&email, &code).await;

        let mut st = self.state();
        if st.epoch != epoch {
            tracing::debug!(
                event = "stale_response_ignored",
                "Verify response for a superseded session dropped"
            );
            return Ok(());
        }
        st.verify_in_flight = false;

        match result {
            Ok(()) => {
                st.session.phase = SessionPhase::Verified;
                st.session.last_error = None;
                st.session.clear_timers();
                let mode = st.mode;
                drop(st);

                tracing::info!(
                    email = %mask_email(&email),
                    event = "otp_verified",
                    "Email verified"
                );
                self.host.on_verified();
                self.host.navigate(mode.redirect_target());
                Ok(())
            }
            Err(err) => {
                let kind = ErrorKind::from(err);
                tracing::warn!(
                    email = %mask_email(&email),
                    error = %kind,
                    event = "otp_verify_failed",
                    "Verification code rejected"
                );
                st.session.last_error = Some(kind.clone());
                st.session.code.clear();
                Err(kind)
            }
        }
    }

    /// Advance both countdowns by one elapsed second
    ///
    /// Invoked once per second by the host's timing facility; a no-op once
    /// the session is torn down, so a stale timer can never mutate a
    /// superseded session.
    pub fn tick(&self) {
        let mut st = self.state();
        if st.closed {
            return;
        }
        st.session.tick();
    }

    /// Snapshot of the current session for rendering
    pub fn session(&self) -> VerificationSession {
        self.state().session.clone()
    }

    /// Current phase, reporting [`SessionPhase::Verifying`] while a verify
    /// call is outstanding
    pub fn phase(&self) -> SessionPhase {
        let st = self.state();
        if st.verify_in_flight {
            SessionPhase::Verifying
        } else {
            st.session.phase
        }
    }

    /// Whether a send is in flight (the host disables the send button)
    pub fn is_sending(&self) -> bool {
        self.state().send_in_flight
    }

    /// Whether a verify is in flight (the host shows a loading state)
    pub fn is_verifying(&self) -> bool {
        self.state().verify_in_flight
    }

    /// Whether the session is currently open
    pub fn is_open(&self) -> bool {
        !self.state().closed
    }

    /// Shared tail of request/resend: run the provider call and apply the
    /// result unless the session was superseded meanwhile
    async fn dispatch(&self, email: String, epoch: u64) -> FlowResult<()> {
        let result = self.provider.send_code(&email).await;

        let mut st = self.state();
        if st.epoch != epoch {
            tracing::debug!(
                event = "stale_response_ignored",
                "Send response for a superseded session dropped"
            );
            return Ok(());
        }
        st.send_in_flight = false;

        match result {
            Ok(()) => {
                let now = self.clock.now();
                st.session.phase = SessionPhase::CodeSent;
                st.session.sent_at = Some(now);
                st.session.arm_timers(
                    self.config.resend_cooldown_seconds,
                    self.config.code_expiry_seconds,
                );
                st.session.last_error = None;
                drop(st);

                self.send_log.record(&email, now);
                tracing::info!(
                    email = %mask_email(&email),
                    event = "otp_sent",
                    "Verification code dispatched"
                );
                Ok(())
            }
            Err(err) => {
                let kind = ErrorKind::DispatchFailed(err.to_string());
                tracing::warn!(
                    email = %mask_email(&email),
                    error = %kind,
                    event = "otp_send_failed",
                    "Provider refused to send a code"
                );
                st.session.last_error = Some(kind.clone());
                Err(kind)
            }
        }
    }

    fn state(&self) -> MutexGuard<'_, FlowState> {
        self.state.lock().expect("flow state lock poisoned")
    }
}
