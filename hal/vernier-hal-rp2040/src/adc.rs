//! ADC measurement channel
//!
//! RP2040 has a single 12-bit ADC with 5 channels:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29
//! - ADC4: Internal temperature sensor

use embassy_rp::adc::{Adc, Blocking, Channel, Error};
use vernier_hal::AnalogInput;

/// RP2040 ADC resolution
pub const ADC_BITS: u8 = 12;

/// ADC channel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcChannel {
    /// ADC0 on GPIO26
    Adc0,
    /// ADC1 on GPIO27
    Adc1,
    /// ADC2 on GPIO28
    Adc2,
    /// ADC3 on GPIO29
    Adc3,
    /// Internal temperature sensor
    Temperature,
}

impl AdcChannel {
    /// Get the GPIO pin for this ADC channel
    pub const fn gpio(&self) -> Option<u8> {
        match self {
            AdcChannel::Adc0 => Some(26),
            AdcChannel::Adc1 => Some(27),
            AdcChannel::Adc2 => Some(28),
            AdcChannel::Adc3 => Some(29),
            AdcChannel::Temperature => None,
        }
    }

    /// Get ADC channel from GPIO pin
    pub const fn from_gpio(gpio: u8) -> Option<Self> {
        match gpio {
            26 => Some(AdcChannel::Adc0),
            27 => Some(AdcChannel::Adc1),
            28 => Some(AdcChannel::Adc2),
            29 => Some(AdcChannel::Adc3),
            _ => None,
        }
    }
}

/// One ADC channel, read with blocking conversions
pub struct AdcInput<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
}

impl<'d> AdcInput<'d> {
    /// Bind the ADC to one channel
    pub fn new(adc: Adc<'d, Blocking>, channel: Channel<'d>) -> Self {
        Self { adc, channel }
    }
}

impl AnalogInput for AdcInput<'_> {
    type Error = Error;

    fn resolution_bits(&self) -> u8 {
        ADC_BITS
    }

    fn read_raw(&mut self) -> Result<u16, Error> {
        self.adc.blocking_read(&mut self.channel)
    }
}
