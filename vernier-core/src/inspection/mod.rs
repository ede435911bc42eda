//! Part inspection
//!
//! Classification of a single measurement against the tolerance window
//! and the running production statistics it feeds.

pub mod measurement;
pub mod stats;

pub use measurement::{Measurement, Verdict};
pub use stats::{ProductionStats, StatsSnapshot};
