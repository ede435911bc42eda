//! Elapsed work clock
//!
//! Counts loop iterations and turns them into whole seconds. The clock is
//! display-only: nothing in the station makes decisions on elapsed time.

use core::fmt::Write;

use heapless::String;

/// Longest `MM:SS` text: `u32::MAX` seconds is 71582788 minutes
pub type ClockText = String<11>;

/// Elapsed time since login, derived from loop ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ElapsedClock {
    /// Iterations since the last whole second (0..period)
    ticks: u16,
    /// Iterations per second
    period: u16,
    /// Whole seconds elapsed
    seconds: u32,
}

impl ElapsedClock {
    /// Create a stopped clock at 00:00
    ///
    /// A `period` of zero is treated as one tick per second.
    pub const fn new(period: u16) -> Self {
        Self {
            ticks: 0,
            period: if period == 0 { 1 } else { period },
            seconds: 0,
        }
    }

    /// Advance by one loop iteration
    ///
    /// Returns true when this tick completed a second.
    pub fn tick(&mut self) -> bool {
        self.ticks += 1;
        if self.ticks >= self.period {
            self.ticks = 0;
            self.seconds = self.seconds.wrapping_add(1);
            true
        } else {
            false
        }
    }

    /// Whole seconds elapsed
    pub fn elapsed_seconds(&self) -> u32 {
        self.seconds
    }

    /// Iterations into the current second
    pub fn tick_count(&self) -> u16 {
        self.ticks
    }

    /// Elapsed time as `MM:SS`
    pub fn mm_ss(&self) -> ClockText {
        format_mm_ss(self.seconds)
    }
}

/// Format seconds as zero-padded `MM:SS`
///
/// Minutes are not wrapped: past 99 the field grows to `MMM:SS` and the
/// panel clips whatever no longer fits on the row.
pub fn format_mm_ss(seconds: u32) -> ClockText {
    let mut out = ClockText::new();
    // Capacity covers the widest u32 minute count
    let _ = write!(out, "{:02}:{:02}", seconds / 60, seconds % 60);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_every_period() {
        let mut clock = ElapsedClock::new(100);
        for _ in 0..99 {
            assert!(!clock.tick());
        }
        assert_eq!(clock.tick_count(), 99);
        assert!(clock.tick());
        assert_eq!(clock.tick_count(), 0);
        assert_eq!(clock.elapsed_seconds(), 1);
    }

    #[test]
    fn test_exactly_once_per_period() {
        let mut clock = ElapsedClock::new(7);
        let seconds = (0..70).filter(|_| clock.tick()).count();
        assert_eq!(seconds, 10);
        assert_eq!(clock.elapsed_seconds(), 10);
    }

    #[test]
    fn test_zero_period() {
        let mut clock = ElapsedClock::new(0);
        assert!(clock.tick());
        assert!(clock.tick());
        assert_eq!(clock.elapsed_seconds(), 2);
    }

    #[test]
    fn test_format() {
        assert_eq!(format_mm_ss(0).as_str(), "00:00");
        assert_eq!(format_mm_ss(59).as_str(), "00:59");
        assert_eq!(format_mm_ss(61).as_str(), "01:01");
        assert_eq!(format_mm_ss(5999).as_str(), "99:59");
    }

    #[test]
    fn test_minutes_past_99_are_not_wrapped() {
        assert_eq!(format_mm_ss(6000).as_str(), "100:00");
        assert_eq!(format_mm_ss(u32::MAX).as_str(), "71582788:15");
    }
}
