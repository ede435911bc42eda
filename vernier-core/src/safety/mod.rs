//! Safety interlock
//!
//! The emergency-stop line preempts everything else the station does.

pub mod interlock;

pub use interlock::{Interlock, SafetyState};
