//! Station digital and analog I/O

use embedded_hal::delay::DelayNs;
use vernier_hal::InputPin;

use super::{Indicator, MeasurementSource, SensorError};
use crate::inspection::Measurement;

/// Everything the control loop reads from or drives on the station
///
/// Inputs are reported as logical states (asserted or not); any
/// electrical polarity is resolved by the implementation.
pub trait StationIo {
    /// Proximity sensor reports a part in the sensing zone
    fn part_present(&mut self) -> bool;

    /// Emergency-stop button is pressed
    fn emergency_stop_asserted(&mut self) -> bool;

    /// Drive the green (accepted) indicator
    fn set_green(&mut self, on: bool);

    /// Drive the red (rejected / tripped) indicator
    fn set_red(&mut self, on: bool);

    /// Flip the red indicator
    fn toggle_red(&mut self);

    /// Drive the buzzer
    fn set_buzzer(&mut self, on: bool);

    /// Sound the buzzer for `ms`, blocking until it is silent again
    fn beep<D: DelayNs>(&mut self, delay: &mut D, ms: u32) {
        self.set_buzzer(true);
        delay.delay_ms(ms);
        self.set_buzzer(false);
    }

    /// Sample the measurement channel once
    fn sample(&mut self) -> Result<Measurement, SensorError>;
}

/// Station I/O assembled from individual pins and drivers
///
/// Both inputs are active-high, as wired on the reference station.
pub struct Board<P, E, G, R, B, M> {
    /// Proximity sensor input
    pub proximity: P,
    /// Emergency-stop input
    pub emergency_stop: E,
    /// Green indicator
    pub green: G,
    /// Red indicator
    pub red: R,
    /// Buzzer
    pub buzzer: B,
    /// Measurement channel
    pub measurement: M,
}

impl<P, E, G, R, B, M> StationIo for Board<P, E, G, R, B, M>
where
    P: InputPin,
    E: InputPin,
    G: Indicator,
    R: Indicator,
    B: Indicator,
    M: MeasurementSource,
{
    fn part_present(&mut self) -> bool {
        self.proximity.is_high()
    }

    fn emergency_stop_asserted(&mut self) -> bool {
        self.emergency_stop.is_high()
    }

    fn set_green(&mut self, on: bool) {
        self.green.set_on(on);
    }

    fn set_red(&mut self, on: bool) {
        self.red.set_on(on);
    }

    fn toggle_red(&mut self) {
        self.red.toggle();
    }

    fn set_buzzer(&mut self, on: bool) {
        self.buzzer.set_on(on);
    }

    fn beep<D: DelayNs>(&mut self, delay: &mut D, ms: u32) {
        self.buzzer.pulse(delay, ms);
    }

    fn sample(&mut self) -> Result<Measurement, SensorError> {
        self.measurement.sample()
    }
}
