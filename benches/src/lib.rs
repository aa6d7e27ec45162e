//! Benchmark fixtures for runrate.

use chrono::{Days, NaiveDate};
use runrate_lib::DaySeries;

/// Shape of a synthetic month used by the benchmarks.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Reference date the projection is made as of.
    pub reference_date: NaiveDate,
    /// Days of history generated before the reference date.
    pub history_days: u64,
}

impl BenchmarkConfig {
    /// Creates a config for `history_days` of data ending the day before `reference_date`.
    #[must_use]
    pub const fn new(reference_date: NaiveDate, history_days: u64) -> Self {
        Self {
            reference_date,
            history_days,
        }
    }

    /// Builds a daily series covering the configured history.
    ///
    /// Values follow a weekly pattern with a slow upward drift so every
    /// weekday average differs.
    #[must_use]
    pub fn daily_series(&self) -> DaySeries<f64> {
        (1..=self.history_days)
            .filter_map(|offset| {
                let day = self.reference_date.checked_sub_days(Days::new(offset))?;
                let weekly = [120.0, 135.0, 128.0, 140.0, 160.0, 70.0, 55.0][(offset % 7) as usize];
                Some((day, weekly + (self.history_days - offset) as f64 * 0.5))
            })
            .collect()
    }
}

/// Benchmark configurations covering both projection branches.
#[must_use]
pub fn benchmark_configs() -> Vec<(&'static str, BenchmarkConfig)> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();
    vec![
        ("early-month", BenchmarkConfig::new(date(2024, 3, 4), 35)),
        ("mid-month", BenchmarkConfig::new(date(2024, 3, 16), 15)),
        ("late-month", BenchmarkConfig::new(date(2024, 3, 30), 29)),
        ("long-history", BenchmarkConfig::new(date(2024, 3, 30), 730)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_series_length() {
        let config = BenchmarkConfig::new(NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(), 15);
        let series = config.daily_series();

        assert_eq!(series.len(), 15);
        assert_eq!(series.last_date(), NaiveDate::from_ymd_opt(2024, 3, 15));
        assert_eq!(series.first_date(), NaiveDate::from_ymd_opt(2024, 3, 1));
    }
}
