//! Types for verification flow modes and outcomes

/// Which entry point opened the verification surface
///
/// The mode only selects copy and the post-success redirect; validation
/// rules are identical in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerificationMode {
    /// Verifying to submit a review
    #[default]
    Standard,
    /// Verifying to reach the admin area
    Admin,
}

impl VerificationMode {
    /// Where the user lands after successful verification
    pub fn redirect_target(&self) -> RedirectTarget {
        match self {
            VerificationMode::Standard => RedirectTarget::SubmitReview,
            VerificationMode::Admin => RedirectTarget::AdminCompanyRequests,
        }
    }
}

/// Post-verification destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    SubmitReview,
    AdminCompanyRequests,
}

impl RedirectTarget {
    /// Path understood by the host's router
    pub fn path(&self) -> &'static str {
        match self {
            RedirectTarget::SubmitReview => "/submit-review",
            RedirectTarget::AdminCompanyRequests => "/admin/company-requests",
        }
    }
}

impl std::fmt::Display for RedirectTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_redirects() {
        assert_eq!(
            VerificationMode::Standard.redirect_target().path(),
            "/submit-review"
        );
        assert_eq!(
            VerificationMode::Admin.redirect_target().path(),
            "/admin/company-requests"
        );
    }

    #[test]
    fn test_default_mode_is_standard() {
        assert_eq!(VerificationMode::default(), VerificationMode::Standard);
    }
}
