//! Per-email record of when the last verification code was dispatched

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Send-timestamp record keyed by email
///
/// Cloning yields another handle onto the same record, so the flow and the
/// diagnostics reporter can share one.
#[derive(Clone, Default)]
pub struct SendLog {
    entries: Arc<Mutex<HashMap<String, DateTime<Utc>>>>,
}

impl SendLog {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a dispatch for `email` at `at`, replacing any earlier entry
    pub fn record(&self, email: &str, at: DateTime<Utc>) {
        self.entries()
            .insert(email.to_string(), at);
    }

    /// When the last code for `email` was dispatched
    pub fn last_sent(&self, email: &str) -> Option<DateTime<Utc>> {
        self.entries().get(email).copied()
    }

    /// Whole seconds elapsed since the last dispatch for `email`
    pub fn seconds_since_send(&self, email: &str, now: DateTime<Utc>) -> Option<i64> {
        self.last_sent(email).map(|at| (now - at).num_seconds())
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, DateTime<Utc>>> {
        self.entries.lock().expect("send log lock poisoned")
    }
}
