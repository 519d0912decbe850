//! Value objects shared across the domain layer.

pub mod eligibility;

pub use eligibility::{check_eligibility, Eligibility, PERSONAL_EMAIL_DOMAINS};
