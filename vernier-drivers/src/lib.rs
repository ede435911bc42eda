//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in vernier-core and vernier-display for the station's hardware:
//!
//! - Indicators (GPIO lamps and buzzer, either polarity)
//! - Character LCD (HD44780 behind a PCF8574 I2C backpack)
//! - Measurement channel (potentiometer on an ADC input)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod indicator;
pub mod lcd;
pub mod sensor;
