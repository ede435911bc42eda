//! Events that trigger state transitions

use crate::inspection::Verdict;

/// Events observed by the control loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Session events
    /// Badge entry did not match
    LoginRejected,
    /// Badge entry matched; operator logged in
    LoginAccepted,

    // Safety events
    /// Emergency stop pressed
    EmergencyAsserted,
    /// Emergency stop released
    EmergencyReleased,

    // Production events
    /// A part was sampled and counted
    PartInspected(Verdict),
    /// The work clock completed a second
    SecondElapsed,

    // Fault events
    /// The measurement channel failed; the part was counted as rejected
    SampleFailed,
    /// Console or display writes failed during this iteration
    LinkFault,
}

impl Event {
    /// Check if this event comes from the safety interlock
    pub fn is_safety_event(&self) -> bool {
        matches!(self, Event::EmergencyAsserted | Event::EmergencyReleased)
    }

    /// Check if this event indicates a hardware problem
    pub fn is_fault(&self) -> bool {
        matches!(self, Event::SampleFailed | Event::LinkFault)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safety_events() {
        assert!(Event::EmergencyAsserted.is_safety_event());
        assert!(Event::EmergencyReleased.is_safety_event());
        assert!(!Event::SecondElapsed.is_safety_event());
    }

    #[test]
    fn test_fault_events() {
        assert!(Event::SampleFailed.is_fault());
        assert!(Event::LinkFault.is_fault());
        assert!(!Event::PartInspected(Verdict::Rejected).is_fault());
    }
}
