//! Configuration type definitions

/// Badge code accepted by the built-in credential
pub const DEFAULT_BADGE: &str = "3103";

/// Operator name bound to the built-in credential
pub const DEFAULT_OPERATOR: &str = "RAMI";

/// Operator name shown before anyone has logged in
pub const PLACEHOLDER_OPERATOR: &str = "----";

/// Full scale of a measurement sample (10-bit)
pub const MEASUREMENT_MAX: u16 = 1023;

/// Inclusive acceptance window for a part measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ToleranceWindow {
    /// Lowest accepted raw value
    pub min: u16,
    /// Highest accepted raw value
    pub max: u16,
}

impl ToleranceWindow {
    /// Production window: 400..=600
    pub const DEFAULT: Self = Self { min: 400, max: 600 };

    /// Create a window, rejecting inverted bounds
    pub const fn new(min: u16, max: u16) -> Option<Self> {
        if min > max {
            None
        } else {
            Some(Self { min, max })
        }
    }

    /// Check whether a raw value lies inside the window (bounds included)
    pub const fn contains(&self, value: u16) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for ToleranceWindow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Loop timing
///
/// Every delay here blocks the whole control loop while it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Nominal period of one loop iteration (ms)
    pub poll_period_ms: u32,
    /// Loop iterations per elapsed second
    pub ticks_per_second: u16,
    /// Wait between part detection and sampling (ms)
    pub stabilization_ms: u32,
    /// Hold after an inspection before the next proximity check (ms)
    pub settle_ms: u32,
    /// Red indicator half period while the interlock is tripped (ms)
    pub blink_half_period_ms: u32,
    /// Length of a short buzzer beep (ms)
    pub beep_ms: u32,
}

impl Timing {
    /// Production timing: 10 ms poll, 100 ticks per second
    pub const DEFAULT: Self = Self {
        poll_period_ms: 10,
        ticks_per_second: 100,
        stabilization_ms: 100,
        settle_ms: 300,
        blink_half_period_ms: 200,
        beep_ms: 100,
    };
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete station configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StationConfig {
    /// Part acceptance window
    pub tolerance: ToleranceWindow,
    /// Loop timing
    pub timing: Timing,
}

impl StationConfig {
    /// Production configuration
    pub const DEFAULT: Self = Self {
        tolerance: ToleranceWindow::DEFAULT,
        timing: Timing::DEFAULT,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_bounds_inclusive() {
        let window = ToleranceWindow::DEFAULT;
        assert!(window.contains(400));
        assert!(window.contains(500));
        assert!(window.contains(600));
        assert!(!window.contains(399));
        assert!(!window.contains(601));
    }

    #[test]
    fn test_inverted_window_rejected() {
        assert!(ToleranceWindow::new(600, 400).is_none());
        assert_eq!(
            ToleranceWindow::new(10, 10),
            Some(ToleranceWindow { min: 10, max: 10 })
        );
    }

    #[test]
    fn test_one_second_of_ticks() {
        let timing = Timing::DEFAULT;
        assert_eq!(
            timing.poll_period_ms * timing.ticks_per_second as u32,
            1000
        );
    }
}
