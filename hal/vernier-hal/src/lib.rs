//! Vernier Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the workstation core
//! is written against. Chip-specific crates (currently RP2040) implement
//! them on top of their HAL, and host tests implement them with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  vernier-core (Workstation loop)        │
//! └─────────────────────────────────────────┘
//!          │                     │
//!          ▼                     ▼
//! ┌─────────────────┐   ┌─────────────────┐
//! │ vernier-drivers │──▶│ vernier-hal     │
//! └─────────────────┘   │ (this crate)    │
//!                       └─────────────────┘
//!                                │
//!                                ▼
//!                       ┌─────────────────┐
//!                       │ vernier-hal-    │
//!                       │    rp2040       │
//!                       └─────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`uart::UartTx`], [`uart::UartRx`] - Operator console serial link
//! - [`i2c::I2cBus`] - I2C bus operations (LCD backpack)
//! - [`adc::AnalogInput`] - Measurement channel sampling

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod i2c;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use adc::AnalogInput;
pub use gpio::{InputPin, OutputPin};
pub use i2c::I2cBus;
pub use uart::{UartConfig, UartRx, UartTx};
