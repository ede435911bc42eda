//! RP2040-specific HAL for the workstation firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `vernier-hal` traits, plus the station's board wiring:
//!
//! - GPIO inputs and outputs
//! - ADC measurement channel
//! - Blocking I2C master for the LCD backpack
//! - Buffered UART console
//! - Board pin map

#![no_std]

pub mod adc;
pub mod gpio;
pub mod i2c;
pub mod pins;
pub mod uart;

pub use adc::AdcInput;
pub use gpio::{GpioInput, GpioOutput};
pub use i2c::BlockingI2c;
pub use uart::ConsoleUart;
