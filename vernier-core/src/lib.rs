//! Board-agnostic core logic for the inspection workstation firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (station I/O, indicators, console)
//! - Session gate and credential verification
//! - Safety interlock
//! - Tolerance classification and production statistics
//! - Elapsed work clock and info-panel layout
//! - State machine and the cooperative control loop (`Workstation`)
//! - Compile-time station configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod inspection;
pub mod panel;
pub mod safety;
pub mod session;
pub mod state;
pub mod station;
pub mod traits;

#[cfg(test)]
pub(crate) mod mock;

pub use station::{Events, LinkHealth, Peripherals, Workstation};
