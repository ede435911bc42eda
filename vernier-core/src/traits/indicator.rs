//! Indicator output trait

use embedded_hal::delay::DelayNs;

/// A two-state output the operator can see or hear
///
/// Implemented for the green and red lamps and for the buzzer.
pub trait Indicator {
    /// Switch the indicator on or off
    fn set_on(&mut self, on: bool);

    /// Check if the indicator is currently on
    fn is_on(&self) -> bool;

    /// Flip the indicator; one call is one blink half period
    fn toggle(&mut self) {
        let on = self.is_on();
        self.set_on(!on);
    }

    /// Switch on for `on_ms`, then off
    ///
    /// Blocks for the whole pulse and always leaves the indicator off.
    fn pulse<D: DelayNs>(&mut self, delay: &mut D, on_ms: u32) {
        self.set_on(true);
        delay.delay_ms(on_ms);
        self.set_on(false);
    }
}
