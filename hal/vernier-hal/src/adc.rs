//! Analog input abstraction
//!
//! A single-shot, blocking conversion on one channel.

/// Analog input channel
pub trait AnalogInput {
    /// Error type for conversions
    type Error;

    /// Converter resolution in bits (e.g. 12 for the RP2040 ADC)
    fn resolution_bits(&self) -> u8;

    /// Run one conversion and return the raw code
    ///
    /// The result is in `0..(1 << resolution_bits())`.
    fn read_raw(&mut self) -> Result<u16, Self::Error>;
}
