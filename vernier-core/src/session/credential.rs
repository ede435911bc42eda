//! Credential verification

use heapless::String;

use crate::config::{DEFAULT_BADGE, DEFAULT_OPERATOR};

/// Digits in a badge code
pub const BADGE_LEN: usize = 4;

/// Visible characters in an operator name
pub const NAME_LEN: usize = 5;

/// Badge code as typed on the console
pub type BadgeCode = String<BADGE_LEN>;

/// Operator name as shown on the display and in telemetry
pub type OperatorName = String<NAME_LEN>;

/// Decides whether a badge code belongs to an operator
pub trait CredentialVerifier {
    /// Return the operator name for a valid badge, `None` otherwise
    fn verify(&self, badge: &str) -> Option<OperatorName>;
}

/// A single hard-coded badge bound to a single operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCredential {
    badge: &'static str,
    operator: &'static str,
}

impl FixedCredential {
    /// The station's built-in credential
    pub const DEFAULT: Self = Self::new(DEFAULT_BADGE, DEFAULT_OPERATOR);

    /// Create a credential
    ///
    /// Operator names longer than `NAME_LEN` are cut when verified.
    pub const fn new(badge: &'static str, operator: &'static str) -> Self {
        Self { badge, operator }
    }
}

impl Default for FixedCredential {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl CredentialVerifier for FixedCredential {
    fn verify(&self, badge: &str) -> Option<OperatorName> {
        if badge != self.badge {
            return None;
        }
        Some(truncate_name(self.operator))
    }
}

/// Copy a name into a fixed buffer, keeping as many whole characters as fit
pub fn truncate_name(name: &str) -> OperatorName {
    let mut out = OperatorName::new();
    for ch in name.chars().take(NAME_LEN) {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_credential() {
        let cred = FixedCredential::DEFAULT;
        assert_eq!(cred.verify("3103").as_deref(), Some("RAMI"));
    }

    #[test]
    fn test_exact_match_only() {
        let cred = FixedCredential::DEFAULT;
        assert!(cred.verify("").is_none());
        assert!(cred.verify("310").is_none());
        assert!(cred.verify("31030").is_none());
        assert!(cred.verify("3013").is_none());
    }

    #[test]
    fn test_long_name_truncated() {
        let cred = FixedCredential::new("1111", "ALEXANDRA");
        assert_eq!(cred.verify("1111").as_deref(), Some("ALEXA"));
    }

    #[test]
    fn test_truncate_multibyte() {
        // Five characters but more than five bytes: keep what fits
        let name = truncate_name("ÉÉÉÉÉ");
        assert!(name.len() <= NAME_LEN);
        assert_eq!(name.as_str(), "ÉÉ");
    }
}
