//! Production statistics

use core::num::NonZeroU32;

use super::Verdict;

/// Running part counts for the current power cycle
///
/// Only the inspection cycle mutates this. `rejected <= total` always
/// holds, and the quality rate is only defined once a part has been
/// counted. Counters saturate instead of wrapping so a wrapped `total`
/// can never reach the rate division as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProductionStats {
    total: u32,
    rejected: u32,
}

/// Statistics right after a part was counted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatsSnapshot {
    /// Parts counted, at least one
    pub total: NonZeroU32,
    /// Parts within tolerance
    pub accepted: u32,
    /// Parts out of tolerance
    pub rejected: u32,
    /// `accepted * 100 / total`, truncated
    pub quality_rate_percent: u8,
}

impl ProductionStats {
    /// Empty statistics
    pub const fn new() -> Self {
        Self {
            total: 0,
            rejected: 0,
        }
    }

    /// Parts counted so far
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Parts rejected so far
    pub fn rejected(&self) -> u32 {
        self.rejected
    }

    /// Parts accepted so far
    pub fn accepted(&self) -> u32 {
        self.total - self.rejected
    }

    /// Quality rate in percent, `None` before the first part
    pub fn quality_rate_percent(&self) -> Option<u8> {
        NonZeroU32::new(self.total).map(|total| quality_rate(self.accepted(), total))
    }

    /// Snapshot of the current counts, `None` before the first part
    pub fn snapshot(&self) -> Option<StatsSnapshot> {
        NonZeroU32::new(self.total).map(|total| self.snapshot_with(total))
    }

    /// Count one inspected part
    ///
    /// The total is bumped before anything is derived from it, so the
    /// returned snapshot always has a non-zero total.
    pub fn record(&mut self, verdict: Verdict) -> StatsSnapshot {
        let total = NonZeroU32::MIN.saturating_add(self.total);
        self.total = total.get();

        if verdict == Verdict::Rejected && self.rejected < self.total {
            self.rejected += 1;
        }

        self.snapshot_with(total)
    }

    fn snapshot_with(&self, total: NonZeroU32) -> StatsSnapshot {
        let accepted = self.accepted();
        StatsSnapshot {
            total,
            accepted,
            rejected: self.rejected,
            quality_rate_percent: quality_rate(accepted, total),
        }
    }
}

fn quality_rate(accepted: u32, total: NonZeroU32) -> u8 {
    // accepted <= total, so the result is at most 100
    (u64::from(accepted) * 100 / u64::from(total.get())) as u8
}
