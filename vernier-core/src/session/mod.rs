//! Operator session
//!
//! The station refuses to run until an operator authenticates with a
//! badge code on the console. One session lasts for the power cycle.

pub mod credential;
pub mod gate;

pub use credential::{
    BadgeCode, CredentialVerifier, FixedCredential, OperatorName, BADGE_LEN, NAME_LEN,
};
pub use gate::{GateStep, SessionGate};

/// An authenticated operator
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OperatorSession {
    badge: BadgeCode,
    operator: OperatorName,
}

impl OperatorSession {
    /// Bind a verified badge to its operator
    pub fn new(badge: BadgeCode, operator: OperatorName) -> Self {
        Self { badge, operator }
    }

    /// Badge code the operator entered
    pub fn badge(&self) -> &str {
        self.badge.as_str()
    }

    /// Operator display name (at most `NAME_LEN` characters)
    pub fn operator(&self) -> &str {
        self.operator.as_str()
    }
}
