//! Measurement channel trait

use crate::inspection::Measurement;

/// Errors that can occur while sampling a part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// ADC conversion error
    ConversionFailed,
    /// Reading outside the 10-bit measurement range
    OutOfRange,
}

/// Source of part measurements
///
/// Takes `&mut self` because ADC reads require mutable access.
pub trait MeasurementSource {
    /// Take one sample
    fn sample(&mut self) -> Result<Measurement, SensorError>;
}
