//! Measurements and their classification

use crate::config::{ToleranceWindow, MEASUREMENT_MAX};
use crate::traits::SensorError;

/// One raw sample of the measurement channel
///
/// Produced and consumed within a single inspection; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    raw: u16,
}

impl Measurement {
    /// Wrap a raw 10-bit sample
    pub fn new(raw: u16) -> Result<Self, SensorError> {
        if raw > MEASUREMENT_MAX {
            return Err(SensorError::OutOfRange);
        }
        Ok(Self { raw })
    }

    /// Raw sample value (0..=1023)
    pub fn raw(&self) -> u16 {
        self.raw
    }

    /// Classify against a tolerance window
    pub fn classify(&self, window: &ToleranceWindow) -> Verdict {
        if window.contains(self.raw) {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    }
}

/// Outcome of inspecting one part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verdict {
    /// Measurement inside the window
    Accepted,
    /// Measurement outside the window, or no usable measurement
    Rejected,
}

impl Verdict {
    /// Check if the part passed
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}
