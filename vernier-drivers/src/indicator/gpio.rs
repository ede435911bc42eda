//! Lamps and buzzer on plain GPIO outputs
//!
//! The pin level is the only state kept: `is_on` reads the output latch
//! back through the configured polarity, so a blink driven with `toggle`
//! can never drift from what the operator actually sees.

use vernier_core::traits::Indicator;
use vernier_hal::OutputPin;

/// Pin level that switches the load on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Load between pin and ground (LED through a resistor)
    ActiveHigh,
    /// Load switched by a PNP stage or sinking into the pin
    ActiveLow,
}

impl Polarity {
    /// Pin level for a logical state
    pub const fn level(self, on: bool) -> bool {
        match self {
            Polarity::ActiveHigh => on,
            Polarity::ActiveLow => !on,
        }
    }
}

/// Lamp or buzzer wired to one GPIO
pub struct GpioIndicator<P> {
    pin: P,
    polarity: Polarity,
}

impl<P: OutputPin> GpioIndicator<P> {
    /// Take the pin and drive it to the off level
    pub fn new(mut pin: P, polarity: Polarity) -> Self {
        pin.set_state(polarity.level(false));
        Self { pin, polarity }
    }

    /// Indicator lamp, LED sourced from the pin
    pub fn lamp(pin: P) -> Self {
        Self::new(pin, Polarity::ActiveHigh)
    }

    /// Active buzzer module with the given input polarity
    pub fn buzzer(pin: P, polarity: Polarity) -> Self {
        Self::new(pin, polarity)
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Give the pin back, left at its current level
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> Indicator for GpioIndicator<P> {
    fn set_on(&mut self, on: bool) {
        self.pin.set_state(self.polarity.level(on));
    }

    fn is_on(&self) -> bool {
        self.pin.is_set_high() == self.polarity.level(true)
    }

    fn toggle(&mut self) {
        self.pin.toggle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::delay::DelayNs;

    /// Output latch that keeps every level it was driven to
    #[derive(Default)]
    struct TracePin {
        levels: Vec<bool>,
    }

    impl OutputPin for TracePin {
        fn set_high(&mut self) {
            self.levels.push(true);
        }

        fn set_low(&mut self) {
            self.levels.push(false);
        }

        fn is_set_high(&self) -> bool {
            self.levels.last().copied().unwrap_or(false)
        }
    }

    #[derive(Default)]
    struct Stopwatch {
        waits_ns: Vec<u32>,
    }

    impl DelayNs for Stopwatch {
        fn delay_ns(&mut self, ns: u32) {
            self.waits_ns.push(ns);
        }
    }

    #[test]
    fn test_claiming_pin_silences_output() {
        let lamp = GpioIndicator::lamp(TracePin::default());
        assert!(!lamp.is_on());
        assert_eq!(lamp.into_inner().levels, [false]);

        let buzzer = GpioIndicator::buzzer(TracePin::default(), Polarity::ActiveLow);
        assert!(!buzzer.is_on());
        assert_eq!(buzzer.into_inner().levels, [true]);
    }

    #[test]
    fn test_beep_is_one_pulse_of_requested_length() {
        let mut buzzer = GpioIndicator::buzzer(TracePin::default(), Polarity::ActiveLow);
        let mut delay = Stopwatch::default();

        buzzer.pulse(&mut delay, 100);

        assert!(!buzzer.is_on());
        assert_eq!(delay.waits_ns.iter().sum::<u32>(), 100_000_000);
        // off at claim, sounding, silenced again
        assert_eq!(buzzer.into_inner().levels, [true, false, true]);
    }

    #[test]
    fn test_blink_alternates_from_current_level() {
        let mut red = GpioIndicator::lamp(TracePin::default());
        for _ in 0..5 {
            red.toggle();
        }

        // An odd number of half periods leaves the lamp lit
        assert!(red.is_on());
        assert_eq!(
            red.into_inner().levels,
            [false, true, false, true, false, true]
        );
    }

    #[test]
    fn test_state_read_back_through_polarity() {
        let mut buzzer = GpioIndicator::buzzer(TracePin::default(), Polarity::ActiveLow);
        buzzer.set_on(true);
        assert!(buzzer.is_on());
        assert_eq!(buzzer.polarity(), Polarity::ActiveLow);
        assert!(buzzer.into_inner().is_set_low());
    }

    #[test]
    fn test_polarity_levels() {
        assert!(Polarity::ActiveHigh.level(true));
        assert!(!Polarity::ActiveHigh.level(false));
        assert!(!Polarity::ActiveLow.level(true));
        assert!(Polarity::ActiveLow.level(false));
    }
}
