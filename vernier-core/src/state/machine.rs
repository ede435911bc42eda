//! State machine definition
//!
//! Which parts of the control loop may run is a function of the current
//! state; transitions are driven by events the loop observes.

use super::events::Event;

/// Station states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Waiting for a valid badge on the console
    Login,
    /// Operator logged in, inspecting parts
    Operating,
    /// Emergency stop held; all production work suspended
    Tripped,
}

impl State {
    /// Check if parts may be sampled and counted
    pub fn inspection_allowed(&self) -> bool {
        matches!(self, State::Operating)
    }

    /// Check if the work clock advances
    pub fn clock_running(&self) -> bool {
        matches!(self, State::Operating)
    }

    /// Check if an operator is logged in
    pub fn has_operator(&self) -> bool {
        !matches!(self, State::Login)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            // Login transitions
            (Login, LoginAccepted) => Operating,
            (Login, LoginRejected) => Login,

            // Operating transitions
            (Operating, EmergencyAsserted) => Tripped,

            // Tripped transitions
            (Tripped, EmergencyReleased) => Operating,

            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspection::Verdict;

    #[test]
    fn test_login_flow() {
        let state = State::Login;
        assert_eq!(state.transition(Event::LoginRejected), State::Login);
        assert_eq!(state.transition(Event::LoginAccepted), State::Operating);
    }

    #[test]
    fn test_emergency_flow() {
        let tripped = State::Operating.transition(Event::EmergencyAsserted);
        assert_eq!(tripped, State::Tripped);
        assert!(!tripped.inspection_allowed());
        assert!(!tripped.clock_running());

        let resumed = tripped.transition(Event::EmergencyReleased);
        assert_eq!(resumed, State::Operating);
    }

    #[test]
    fn test_no_trip_before_login() {
        // The interlock only runs inside the operating loop
        assert_eq!(
            State::Login.transition(Event::EmergencyAsserted),
            State::Login
        );
    }

    #[test]
    fn test_tripped_ignores_production_events() {
        let events = [
            Event::PartInspected(Verdict::Accepted),
            Event::SecondElapsed,
            Event::LoginAccepted,
            Event::SampleFailed,
        ];
        for event in events {
            assert_eq!(State::Tripped.transition(event), State::Tripped);
        }
    }

    #[test]
    fn test_permissions() {
        assert!(State::Operating.inspection_allowed());
        assert!(State::Operating.clock_running());
        assert!(!State::Login.inspection_allowed());
        assert!(!State::Login.has_operator());
        assert!(State::Tripped.has_operator());
    }
}
