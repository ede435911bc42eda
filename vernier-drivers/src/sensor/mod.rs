//! Measurement channel drivers

pub mod potentiometer;

pub use potentiometer::Potentiometer;
