//! Read-only status reporter for the verification flow

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::services::verification::FlowConfig;

use super::send_log::SendLog;

/// Point-in-time view of the flow's configuration and send timing
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticsSnapshot {
    /// Whether the remote provider has an endpoint and key configured
    pub provider_configured: bool,
    /// Whether the testing bypass is active
    pub testing_bypass: bool,
    /// Whether the personal-email restriction is relaxed
    pub personal_emails_allowed: bool,
    /// Seconds since the last code went to the inspected email, when known
    pub last_send_elapsed_seconds: Option<i64>,
    /// When this snapshot was taken
    pub generated_at: DateTime<Utc>,
}

/// Injectable, side-effect-free observer of the verification setup
///
/// Constructed per host (or per test, with a controlled clock); never
/// coupled into the state machine's control flow.
pub struct DiagnosticsReporter {
    provider_configured: bool,
    testing_bypass: bool,
    personal_emails_allowed: bool,
    send_log: SendLog,
    clock: Arc<dyn Clock>,
}

impl DiagnosticsReporter {
    /// Create a reporter over the given configuration and send record
    pub fn new(provider_configured: bool, config: &FlowConfig, send_log: SendLog) -> Self {
        Self {
            provider_configured,
            testing_bypass: config.testing_bypass,
            personal_emails_allowed: config.allow_personal_emails,
            send_log,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replace the wall clock (tests pass a [`ManualClock`](crate::clock::ManualClock))
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Snapshot without send-timing information
    pub fn snapshot(&self) -> DiagnosticsSnapshot {
        self.build_snapshot(None)
    }

    /// Snapshot including elapsed time since the last code went to `email`
    pub fn snapshot_for(&self, email: &str) -> DiagnosticsSnapshot {
        let elapsed = self.send_log.seconds_since_send(email, self.clock.now());
        self.build_snapshot(elapsed)
    }

    /// Seconds since the last dispatch to `email`, if one was recorded
    pub fn elapsed_since_send(&self, email: &str) -> Option<i64> {
        self.send_log.seconds_since_send(email, self.clock.now())
    }

    /// Configuration findings an operator should know about
    pub fn configuration_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if !self.provider_configured {
            issues.push(
                "Identity provider is not configured. Set AUTH_PROVIDER_URL and AUTH_PROVIDER_KEY."
                    .to_string(),
            );
        }
        if self.testing_bypass {
            issues.push("Testing bypass is enabled. Email verification is skipped.".to_string());
        }
        if self.personal_emails_allowed {
            issues.push(
                "Personal emails are allowed. This should be disabled in production.".to_string(),
            );
        }
        issues
    }

    /// Emit the current status through tracing
    pub fn log_status(&self) {
        let snapshot = self.snapshot();
        tracing::info!(
            provider_configured = snapshot.provider_configured,
            testing_bypass = snapshot.testing_bypass,
            personal_emails_allowed = snapshot.personal_emails_allowed,
            event = "verification_status",
            "Verification flow status"
        );
        for issue in self.configuration_issues() {
            tracing::warn!(event = "verification_config_issue", "{issue}");
        }
    }

    fn build_snapshot(&self, last_send_elapsed_seconds: Option<i64>) -> DiagnosticsSnapshot {
        DiagnosticsSnapshot {
            provider_configured: self.provider_configured,
            testing_bypass: self.testing_bypass,
            personal_emails_allowed: self.personal_emails_allowed,
            last_send_elapsed_seconds,
            generated_at: self.clock.now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::TimeZone;

    fn fixed_clock() -> (ManualClock, DateTime<Utc>) {
        let start = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        (ManualClock::new(start), start)
    }

    #[test]
    fn test_snapshot_reflects_configuration() {
        let config = FlowConfig {
            testing_bypass: true,
            allow_personal_emails: true,
            ..FlowConfig::default()
        };
        let (clock, start) = fixed_clock();
        let reporter = DiagnosticsReporter::new(false, &config, SendLog::new())
            .with_clock(Arc::new(clock));

        let snapshot = reporter.snapshot();
        assert!(!snapshot.provider_configured);
        assert!(snapshot.testing_bypass);
        assert!(snapshot.personal_emails_allowed);
        assert_eq!(snapshot.last_send_elapsed_seconds, None);
        assert_eq!(snapshot.generated_at, start);
    }

    #[test]
    fn test_snapshot_for_reports_elapsed_send_time() {
        let (clock, start) = fixed_clock();
        let send_log = SendLog::new();
        send_log.record("user@acme.com", start);

        let reporter = DiagnosticsReporter::new(true, &FlowConfig::default(), send_log)
            .with_clock(Arc::new(clock.clone()));

        clock.advance_secs(95);
        let snapshot = reporter.snapshot_for("user@acme.com");
        assert_eq!(snapshot.last_send_elapsed_seconds, Some(95));

        assert_eq!(reporter.snapshot_for("nobody@acme.com").last_send_elapsed_seconds, None);
    }

    #[test]
    fn test_configuration_issues() {
        let healthy = DiagnosticsReporter::new(true, &FlowConfig::default(), SendLog::new());
        assert!(healthy.configuration_issues().is_empty());

        let config = FlowConfig {
            testing_bypass: true,
            allow_personal_emails: true,
            ..FlowConfig::default()
        };
        let broken = DiagnosticsReporter::new(false, &config, SendLog::new());
        let issues = broken.configuration_issues();
        assert_eq!(issues.len(), 3);
        assert!(issues[0].contains("not configured"));
        assert!(issues[1].contains("Testing bypass"));
        assert!(issues[2].contains("Personal emails"));
    }

    #[test]
    fn test_snapshot_serializes() {
        let (clock, _) = fixed_clock();
        let reporter = DiagnosticsReporter::new(true, &FlowConfig::default(), SendLog::new())
            .with_clock(Arc::new(clock));

        let json = serde_json::to_value(reporter.snapshot()).unwrap();
        assert_eq!(json["provider_configured"], true);
        assert_eq!(json["testing_bypass"], false);
        assert!(json["last_send_elapsed_seconds"].is_null());
    }
}
