//! Email eligibility policy.
//!
//! An address is eligible for code dispatch when it is syntactically valid
//! and, unless the deployment relaxes the rule, not hosted by a consumer
//! email provider. The check is pure and synchronous; dispatch is gated on
//! the result.

use vw_shared::utils::email::{email_domain, is_valid_email_format};

use crate::errors::EligibilityError;

/// Consumer email providers rejected when the work-email rule is active.
/// Membership is an exact domain match after lower-casing.
pub const PERSONAL_EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "aol.com",
    "icloud.com",
    "live.com",
    "msn.com",
    "ymail.com",
    "protonmail.com",
    "mail.com",
    "zoho.com",
    "gmx.com",
];

/// Result of the eligibility check for a candidate address
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Eligibility {
    /// Nothing entered yet
    Unvalidated,
    /// Eligible for code dispatch
    Valid,
    /// Rejected, with the reason to show the user
    Invalid(EligibilityError),
}

impl Eligibility {
    /// Whether dispatch is allowed
    pub fn is_valid(&self) -> bool {
        matches!(self, Eligibility::Valid)
    }

    /// The rejection reason, if any
    pub fn error(&self) -> Option<&EligibilityError> {
        match self {
            Eligibility::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

/// Check whether an address may receive a verification code
///
/// # Arguments
///
/// * `email` - Raw candidate address as typed
/// * `allow_personal_emails` - Relax the consumer-provider rule
pub fn check_eligibility(email: &str, allow_personal_emails: bool) -> Eligibility {
    if email.is_empty() {
        return Eligibility::Unvalidated;
    }

    if !is_valid_email_format(email) {
        return Eligibility::Invalid(EligibilityError::InvalidFormat);
    }

    if !allow_personal_emails {
        if let Some(domain) = email_domain(email) {
            let domain = domain.to_lowercase();
            if PERSONAL_EMAIL_DOMAINS.contains(&domain.as_str()) {
                return Eligibility::Invalid(EligibilityError::PersonalProvider);
            }
        }
    }

    Eligibility::Valid
}
