//! Potentiometer measurement channel
//!
//! The part gauge is a potentiometer on an ADC input. Whatever the
//! converter's resolution, readings are rescaled to the 10-bit range the
//! tolerance window is expressed in.

use vernier_core::inspection::Measurement;
use vernier_core::traits::{MeasurementSource, SensorError};
use vernier_hal::AnalogInput;

/// Bits in a measurement
pub const MEASUREMENT_BITS: u8 = 10;

/// Potentiometer on an analog input
pub struct Potentiometer<ADC> {
    adc: ADC,
}

impl<ADC: AnalogInput> Potentiometer<ADC> {
    /// Create a new measurement channel
    pub fn new(adc: ADC) -> Self {
        Self { adc }
    }

    /// Rescale a raw code from `bits` of resolution to 10 bits
    ///
    /// Wider codes are truncated, narrower codes are shifted up.
    pub fn scale(raw: u16, bits: u8) -> u16 {
        if bits >= MEASUREMENT_BITS {
            raw >> (bits - MEASUREMENT_BITS).min(15)
        } else {
            raw << (MEASUREMENT_BITS - bits)
        }
    }

    /// Release the ADC channel
    pub fn into_inner(self) -> ADC {
        self.adc
    }
}

impl<ADC: AnalogInput> MeasurementSource for Potentiometer<ADC> {
    fn sample(&mut self) -> Result<Measurement, SensorError> {
        let raw = self
            .adc
            .read_raw()
            .map_err(|_| SensorError::ConversionFailed)?;

        Measurement::new(Self::scale(raw, self.adc.resolution_bits()))
    }
}
