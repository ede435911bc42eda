//! State machine for the workstation
//!
//! Defines the authoritative runtime behavior of the station.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::State;
