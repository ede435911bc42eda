//! Operator Console Protocol
//!
//! This crate defines the text protocol spoken on the workstation's serial
//! console (9600 baud, 8N1). The console carries two things:
//!
//! - **Badge entry** (operator → station): decimal digits terminated by a
//!   carriage return. Every accepted digit is echoed back as `*`.
//! - **Transcript** (station → operator): login prompts and results, plus
//!   one telemetry line per inspected part:
//!
//! ```text
//! OP:<name> OK:<accepted> KO:<rejected>\r\n
//! ```
//!
//! Lines are plain ASCII. The station never waits for acknowledgement.

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

pub mod input;
pub mod messages;

pub use input::{ConsoleInput, CARRIAGE_RETURN, MASK_CHAR};
pub use messages::{ConsoleMessage, EncodeError, Line, Telemetry, MAX_LINE_LEN};
