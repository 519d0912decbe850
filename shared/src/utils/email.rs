//! Email address utility functions
//!
//! Syntactic validation and log-safe masking. Domain policy (which providers
//! are acceptable) lives in the core crate; this module only answers "does
//! this look like an email address" and "how do I print one without leaking
//! it".

use once_cell::sync::Lazy;
use regex::Regex;

/// Basic `local@domain.tld` shape: no whitespace, exactly one `@`, and at
/// least one dot in the domain part.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
});

/// Validates the syntactic shape of an email address
///
/// # Examples
///
/// ```
/// use vw_shared::utils::email::is_valid_email_format;
///
/// assert!(is_valid_email_format("user@acme.com"));
/// assert!(!is_valid_email_format("user@acme"));     // no TLD
/// assert!(!is_valid_email_format("not-an-email"));  // no @
/// ```
pub fn is_valid_email_format(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Extract the domain part of an email address
///
/// Returns `None` when the input has no `@` or an empty domain.
pub fn email_domain(email: &str) -> Option<&str> {
    match email.split_once('@') {
        Some((_, domain)) if !domain.is_empty() => Some(domain),
        _ => None,
    }
}

/// Mask an email address for logging (keep the first character of the local
/// part and the full domain)
///
/// # Examples
///
/// ```
/// use vw_shared::utils::email::mask_email;
///
/// assert_eq!(mask_email("jane.doe@acme.com"), "j***@acme.com");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = &local[..local.chars().next().map_or(0, char::len_utf8)];
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email_format() {
        assert!(is_valid_email_format("user@acme.com"));
        assert!(is_valid_email_format("first.last@sub.example.co"));
        assert!(is_valid_email_format("u@d.io"));

        assert!(!is_valid_email_format(""));
        assert!(!is_valid_email_format("plainaddress"));
        assert!(!is_valid_email_format("user@domain"));       // no dot after @
        assert!(!is_valid_email_format("user@@acme.com"));    // double @
        assert!(!is_valid_email_format("user @acme.com"));    // whitespace
        assert!(!is_valid_email_format("user@acme .com"));
        assert!(!is_valid_email_format("@acme.com"));
        assert!(!is_valid_email_format("user@"));
    }

    #[test]
    fn test_email_domain() {
        assert_eq!(email_domain("user@acme.com"), Some("acme.com"));
        assert_eq!(email_domain("user@GMAIL.com"), Some("GMAIL.com"));
        assert_eq!(email_domain("no-at-sign"), None);
        assert_eq!(email_domain("user@"), None);
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("jane.doe@acme.com"), "j***@acme.com");
        assert_eq!(mask_email("x@y.io"), "x***@y.io");
        assert_eq!(mask_email("not-an-email"), "***");
        assert_eq!(mask_email(""), "***");
    }
}
