//! Per-weekday sample accumulation.

use runrate_types::DayType;
use serde::{Deserialize, Serialize};

/// Running sum and sample count for one day type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DayTypeStats {
    /// Sum of sampled values.
    pub sum: f64,
    /// Number of samples.
    pub count: u32,
}

impl DayTypeStats {
    /// Returns the mean of the samples, or `None` if there are none.
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / f64::from(self.count))
    }
}

/// Day-of-week profile built from sampled days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DayTypeProfile {
    stats: [DayTypeStats; 7],
}

impl DayTypeProfile {
    /// Creates an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one sample for `day_type`.
    pub fn record(&mut self, day_type: DayType, value: f64) {
        let stats = &mut self.stats[day_type.index()];
        stats.sum += value;
        stats.count += 1;
    }

    /// Returns the accumulated stats for `day_type`.
    #[must_use]
    pub const fn stats(&self, day_type: DayType) -> DayTypeStats {
        self.stats[day_type.index()]
    }

    /// Returns the mean for `day_type`, or `None` if it was never sampled.
    #[must_use]
    pub fn average(&self, day_type: DayType) -> Option<f64> {
        self.stats(day_type).average()
    }

    /// Returns the total number of samples across all day types.
    #[must_use]
    pub fn sample_count(&self) -> u32 {
        self.stats.iter().map(|s| s.count).sum()
    }

    /// Returns the day types that have no samples.
    pub fn missing_day_types(&self) -> impl Iterator<Item = DayType> + '_ {
        DayType::all()
            .iter()
            .copied()
            .filter(|day_type| self.stats(*day_type).count == 0)
    }

    /// Iterates over `(day type, stats)` pairs in ISO order.
    pub fn iter(&self) -> impl Iterator<Item = (DayType, DayTypeStats)> + '_ {
        DayType::all()
            .iter()
            .map(|&day_type| (day_type, self.stats(day_type)))
    }
}
