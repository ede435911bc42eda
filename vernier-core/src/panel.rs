//! Info panel layout
//!
//! Everything the station shows on its 16x2 display. Positions are
//! zero-based (row, column):
//!
//! ```text
//!   0         1
//!   0123456789012345
//! 0 RAMI   T: MM:SS
//! 1 OK:nn  QR:rrr%
//! ```

use core::fmt::Write;

use heapless::String;
use vernier_display::{CharDisplay, DisplayError};

use crate::clock::ElapsedClock;
use crate::inspection::StatsSnapshot;

/// Shown while waiting for a badge
pub const LOGIN_BANNER: &str = "LOGIN...";

/// Shown while the interlock is tripped
pub const EMERGENCY_BANNER: &str = "EMERGENCY STOP";

const NAME_AT: (u8, u8) = (0, 0);
const TIME_LABEL_AT: (u8, u8) = (0, 6);
const TIME_AT: (u8, u8) = (0, 10);
const OK_LABEL_AT: (u8, u8) = (1, 0);
const OK_AT: (u8, u8) = (1, 3);
const QR_LABEL_AT: (u8, u8) = (1, 7);
const QR_AT: (u8, u8) = (1, 10);
const PERCENT_AT: (u8, u8) = (1, 13);

fn put<D: CharDisplay>(display: &mut D, at: (u8, u8), text: &str) -> Result<(), DisplayError> {
    display.write_str(at.0, at.1, text)
}

/// Login screen: cleared, banner on the first row
pub fn render_login<D: CharDisplay>(display: &mut D) -> Result<(), DisplayError> {
    display.clear()?;
    put(display, NAME_AT, LOGIN_BANNER)
}

/// Emergency screen: cleared, banner on the first row
pub fn render_emergency<D: CharDisplay>(display: &mut D) -> Result<(), DisplayError> {
    display.clear()?;
    put(display, NAME_AT, EMERGENCY_BANNER)
}

/// First row: operator name and elapsed time
pub fn render_info<D: CharDisplay>(
    display: &mut D,
    operator: &str,
    clock: &ElapsedClock,
) -> Result<(), DisplayError> {
    put(display, NAME_AT, operator)?;
    put(display, TIME_LABEL_AT, " T:")?;
    put(display, TIME_AT, clock.mm_ss().as_str())
}

/// Second row: accepted count and quality rate
pub fn render_stats<D: CharDisplay>(
    display: &mut D,
    stats: &StatsSnapshot,
) -> Result<(), DisplayError> {
    put(display, OK_LABEL_AT, "OK:")?;
    put(display, OK_AT, accepted_field(stats.accepted).as_str())?;
    put(display, QR_LABEL_AT, "QR:")?;
    put(display, QR_AT, rate_field(stats.quality_rate_percent).as_str())?;
    put(display, PERCENT_AT, "%")
}

/// Last two characters of the accepted count, right-aligned
///
/// `5` reads `" 5"`, `123` reads `"23"`.
pub fn accepted_field(accepted: u32) -> String<2> {
    let mut out = String::new();
    if accepted < 10 {
        let _ = write!(out, " {}", accepted);
    } else {
        let _ = write!(out, "{:02}", accepted % 100);
    }
    out
}

/// Quality rate right-aligned in three characters
pub fn rate_field(percent: u8) -> String<3> {
    let mut out = String::new();
    // A u8 never needs more than three digits
    let _ = write!(out, "{:>3}", percent);
    out
}
