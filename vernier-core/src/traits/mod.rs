//! Hardware abstraction traits
//!
//! These traits define the interface between the workstation logic
//! and hardware-specific implementations.

pub mod console;
pub mod indicator;
pub mod io;
pub mod sensor;

pub use console::{Console, ConsoleError};
pub use indicator::Indicator;
pub use io::{Board, StationIo};
pub use sensor::{MeasurementSource, SensorError};
