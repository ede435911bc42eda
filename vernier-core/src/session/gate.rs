//! Badge entry gate
//!
//! Byte-at-a-time state machine for the login prompt. The gate has no
//! timeout, no lockout and no attempt limit: a wrong code just clears the
//! entry and the operator tries again.

use vernier_protocol::ConsoleInput;

use super::{BadgeCode, CredentialVerifier, OperatorSession};

/// What the gate did with one console byte
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateStep {
    /// Digit stored; echo a mask character
    Echo,
    /// Digit arrived with the entry already full; nothing to echo
    Dropped,
    /// Byte is not part of a badge entry
    Ignored,
    /// Entry terminated and did not match; the entry is cleared
    Rejected,
    /// Entry terminated and matched
    Accepted(OperatorSession),
}

/// Badge entry buffer plus attempt bookkeeping
#[derive(Debug, Clone, Default)]
pub struct SessionGate {
    entry: BadgeCode,
    rejected_attempts: u32,
}

impl SessionGate {
    /// Create an empty gate
    pub const fn new() -> Self {
        Self {
            entry: BadgeCode::new(),
            rejected_attempts: 0,
        }
    }

    /// Feed one received byte
    pub fn feed<V: CredentialVerifier>(&mut self, byte: u8, verifier: &V) -> GateStep {
        match ConsoleInput::from_byte(byte) {
            ConsoleInput::Digit(digit) => {
                if self.entry.push(digit as char).is_ok() {
                    GateStep::Echo
                } else {
                    GateStep::Dropped
                }
            }
            ConsoleInput::Enter => match verifier.verify(self.entry.as_str()) {
                Some(operator) => {
                    let badge = core::mem::take(&mut self.entry);
                    GateStep::Accepted(OperatorSession::new(badge, operator))
                }
                None => {
                    self.entry.clear();
                    self.rejected_attempts = self.rejected_attempts.saturating_add(1);
                    GateStep::Rejected
                }
            },
            ConsoleInput::Other(_) => GateStep::Ignored,
        }
    }

    /// Number of wrong codes entered so far
    pub fn rejected_attempts(&self) -> u32 {
        self.rejected_attempts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::FixedCredential;
    use proptest::prelude::*;

    fn feed_all(gate: &mut SessionGate, bytes: &[u8]) -> heapless::Vec<GateStep, 16> {
        let cred = FixedCredential::DEFAULT;
        let mut steps = heapless::Vec::new();
        for &b in bytes {
            let _ = steps.push(gate.feed(b, &cred));
        }
        steps
    }

    #[test]
    fn test_valid_badge() {
        let mut gate = SessionGate::new();
        let steps = feed_all(&mut gate, b"3103\r");
        assert!(steps[..4].iter().all(|s| *s == GateStep::Echo));
        match &steps[4] {
            GateStep::Accepted(session) => {
                assert_eq!(session.operator(), "RAMI");
                assert_eq!(session.badge(), "3103");
            }
            other => panic!("expected acceptance, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_badge_resets_entry() {
        let mut gate = SessionGate::new();
        let steps = feed_all(&mut gate, b"1234\r");
        assert_eq!(steps[4], GateStep::Rejected);
        assert_eq!(gate.rejected_attempts(), 1);

        // Retry after a failure works
        let steps = feed_all(&mut gate, b"3103\r");
        assert!(matches!(steps[4], GateStep::Accepted(_)));
    }

    #[test]
    fn test_fifth_digit_dropped() {
        let mut gate = SessionGate::new();
        let steps = feed_all(&mut gate, b"31039\r");
        assert_eq!(steps[4], GateStep::Dropped);
        // "3103" was kept, so the extra digit does not spoil the entry
        assert!(matches!(steps[5], GateStep::Accepted(_)));
    }

    #[test]
    fn test_non_digits_ignored() {
        let mut gate = SessionGate::new();
        let steps = feed_all(&mut gate, b"3a1\n03\r");
        assert_eq!(steps[1], GateStep::Ignored);
        assert_eq!(steps[3], GateStep::Ignored);
        assert!(matches!(steps[6], GateStep::Accepted(_)));
    }

    #[test]
    fn test_empty_entry_rejected() {
        let mut gate = SessionGate::new();
        let steps = feed_all(&mut gate, b"\r");
        assert_eq!(steps[0], GateStep::Rejected);
    }

    proptest! {
        #[test]
        fn prop_wrong_codes_never_accepted(code in "[0-9]{0,6}") {
            prop_assume!(!code.starts_with("3103"));
            let mut gate = SessionGate::new();
            let cred = FixedCredential::DEFAULT;
            let mut rejections = 0;

            for b in code.bytes().chain(core::iter::once(b'\r')) {
                match gate.feed(b, &cred) {
                    GateStep::Accepted(_) => prop_assert!(false, "accepted {}", code),
                    GateStep::Rejected => rejections += 1,
                    _ => {}
                }
            }
            prop_assert_eq!(rejections, 1);

            // The failed entry left nothing behind
            let steps = feed_all(&mut gate, b"3103\r");
            prop_assert!(matches!(steps[4], GateStep::Accepted(_)));
        }
    }
}
