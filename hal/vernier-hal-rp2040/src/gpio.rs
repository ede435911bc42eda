//! GPIO adapters
//!
//! Wraps embassy-rp pins in the shared HAL traits.

use embassy_rp::gpio::{Input, Output};
use vernier_hal::{InputPin, OutputPin};

/// Maximum number of GPIO pins on RP2040
pub const GPIO_COUNT: u8 = 30;

/// Push-pull output
pub struct GpioOutput<'d> {
    pin: Output<'d>,
}

impl<'d> GpioOutput<'d> {
    /// Wrap a configured output
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl OutputPin for GpioOutput<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn toggle(&mut self) {
        self.pin.toggle();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Digital input
pub struct GpioInput<'d> {
    pin: Input<'d>,
}

impl<'d> GpioInput<'d> {
    /// Wrap a configured input
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl InputPin for GpioInput<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
