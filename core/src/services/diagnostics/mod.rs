//! Operator-facing diagnostics for the verification flow
//!
//! A pure observer over configuration and send timing. Nothing here can
//! alter a [`VerificationSession`](crate::domain::entities::session::VerificationSession);
//! the flow writes send timestamps into a [`SendLog`] and the reporter only
//! reads them.

mod reporter;
mod send_log;

pub use reporter::{DiagnosticsReporter, DiagnosticsSnapshot};
pub use send_log::SendLog;
