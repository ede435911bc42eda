//! Emergency-stop interlock
//!
//! While the emergency stop is held the station does nothing but sound the
//! buzzer, blink the red lamp and watch the button. No part is sampled and
//! no clock tick is counted until it is released.

use embedded_hal::delay::DelayNs;

use crate::traits::StationIo;

/// Interlock condition for the current iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SafetyState {
    /// Emergency stop released
    Normal,
    /// Emergency stop pressed
    Tripped,
}

impl SafetyState {
    /// Derive the state from the emergency-stop input
    pub fn from_input(asserted: bool) -> Self {
        if asserted {
            SafetyState::Tripped
        } else {
            SafetyState::Normal
        }
    }

    /// Check if the interlock is tripped
    pub fn is_tripped(&self) -> bool {
        matches!(self, SafetyState::Tripped)
    }
}

/// Interlock driver and trip bookkeeping
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Interlock {
    /// Times the interlock has tripped
    trips: u32,
}

impl Interlock {
    /// Create an interlock that has never tripped
    pub const fn new() -> Self {
        Self { trips: 0 }
    }

    /// Sample the emergency-stop input
    pub fn check<I: StationIo>(&self, io: &mut I) -> SafetyState {
        SafetyState::from_input(io.emergency_stop_asserted())
    }

    /// Enter the tripped state: buzzer on continuously
    pub fn engage<I: StationIo>(&mut self, io: &mut I) {
        self.trips = self.trips.saturating_add(1);
        io.set_buzzer(true);
    }

    /// Block until the emergency stop is released
    ///
    /// Blinks the red lamp with the given half period and re-reads the
    /// input after every half period. Returns the number of toggles.
    pub fn hold<I: StationIo, D: DelayNs>(
        &self,
        io: &mut I,
        delay: &mut D,
        half_period_ms: u32,
    ) -> u32 {
        let mut toggles: u32 = 0;
        while io.emergency_stop_asserted() {
            io.toggle_red();
            delay.delay_ms(half_period_ms);
            toggles = toggles.saturating_add(1);
        }
        toggles
    }

    /// Leave the tripped state: buzzer and red lamp forced off
    pub fn release<I: StationIo>(&mut self, io: &mut I) {
        io.set_buzzer(false);
        io.set_red(false);
    }

    /// Times the interlock has tripped since power-up
    pub fn trip_count(&self) -> u32 {
        self.trips
    }
}
