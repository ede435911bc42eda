//! Character display abstraction for the Vernier workstation
//!
//! This crate provides:
//! - `CharDisplay` trait for fixed-grid character displays (HD44780 and alike)
//! - `Screen`, an in-memory 16x2 grid implementing `CharDisplay`
//!
//! # Architecture
//!
//! The workstation core renders its panels through `CharDisplay` and never
//! touches the display controller directly. The LCD driver in
//! `vernier-drivers` implements the trait for real hardware; `Screen`
//! implements it for host-side rendering and tests.
//!
//! Rows and columns are zero-based everywhere in this crate.

#![no_std]

pub mod backend;
pub mod screen;

// Re-export key types
pub use backend::{CharDisplay, DisplayError};
pub use screen::{Screen, SCREEN_COLS, SCREEN_ROWS};
