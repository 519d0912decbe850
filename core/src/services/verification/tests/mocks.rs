//! Mock implementations for testing the verification flow

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::errors::ProviderError;
use crate::services::verification::traits::{FlowHost, OtpProvider};
use crate::services::verification::types::RedirectTarget;

/// Recording provider with programmable failures and optional gates that
/// hold a call open until the test releases it
#[derive(Default)]
pub struct MockProvider {
    pub send_calls: Mutex<Vec<String>>,
    pub verify_calls: Mutex<Vec<(String, String)>>,
    send_error: Mutex<Option<ProviderError>>,
    verify_error: Mutex<Option<ProviderError>>,
    send_gate: Option<Arc<Notify>>,
    verify_gate: Option<Arc<Notify>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold every send open until the returned gate is notified
    pub fn with_send_gate(mut self, gate: Arc<Notify>) -> Self {
        self.send_gate = Some(gate);
        self
    }

    /// Hold every verify open until the returned gate is notified
    pub fn with_verify_gate(mut self, gate: Arc<Notify>) -> Self {
        self.verify_gate = Some(gate);
        self
    }

    pub fn set_send_error(&self, error: Option<ProviderError>) {
        *self.send_error.lock().unwrap() = error;
    }

    pub fn set_verify_error(&self, error: Option<ProviderError>) {
        *self.verify_error.lock().unwrap() = error;
    }

    pub fn send_count(&self) -> usize {
        self.send_calls.lock().unwrap().len()
    }

    pub fn verify_count(&self) -> usize {
        self.verify_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl OtpProvider for MockProvider {
    async fn send_code(&self, email: &str) -> Result<(), ProviderError> {
        self.send_calls.lock().unwrap().push(email.to_string());
        if let Some(gate) = &self.send_gate {
            gate.notified().await;
        }
        match self.send_error.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    async fn verify_code(&self, email: &str, code: &str) -> Result<(), ProviderError> {
        self.verify_calls
            .lock()
            .unwrap()
            .push((email.to_string(), code.to_string()));
        if let Some(gate) = &self.verify_gate {
            gate.notified().await;
        }
        match self.verify_error.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Recording host
#[derive(Default)]
pub struct MockHost {
    verified: AtomicUsize,
    navigations: Mutex<Vec<RedirectTarget>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verified_count(&self) -> usize {
        self.verified.load(Ordering::SeqCst)
    }

    pub fn navigations(&self) -> Vec<RedirectTarget> {
        self.navigations.lock().unwrap().clone()
    }
}

impl FlowHost for MockHost {
    fn on_verified(&self) {
        self.verified.fetch_add(1, Ordering::SeqCst);
    }

    fn navigate(&self, target: RedirectTarget) {
        self.navigations.lock().unwrap().push(target);
    }
}
