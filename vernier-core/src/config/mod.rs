//! Station configuration
//!
//! Thresholds and timings are fixed at build time; nothing here is read
//! from storage or changed while the station runs.

pub mod types;

pub use types::*;
