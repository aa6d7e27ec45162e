//! Uniform daily-rate projection.

use chrono::{Datelike, NaiveDate};
use runrate_types::days_in_month;
use tracing::trace;

/// Projects `total_so_far` to the end of the month assuming a constant daily rate.
///
/// `total_so_far` covers day 1 through the day of `reference_date`, inclusive.
///
/// ```
/// use chrono::NaiveDate;
/// use runrate_extrapolate::extrapolate_linear;
///
/// let reference = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// assert_eq!(extrapolate_linear(1500.0, reference), 3100.0);
/// ```
#[must_use]
pub fn extrapolate_linear(total_so_far: f64, reference_date: NaiveDate) -> f64 {
    let days_elapsed = reference_date.day();
    if days_elapsed == 0 {
        return 0.0;
    }
    let days_in_month = days_in_month(reference_date);

    let estimate = total_so_far / f64::from(days_elapsed) * f64::from(days_in_month);
    trace!(%reference_date, total_so_far, days_elapsed, days_in_month, estimate, "linear projection");
    estimate
}

/// Stateless linear month-end extrapolator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearExtrapolator;

impl LinearExtrapolator {
    /// Creates a new linear extrapolator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Projects `total_so_far` to the end of `reference_date`'s month.
    #[must_use]
    pub fn extrapolate(&self, total_so_far: f64, reference_date: NaiveDate) -> f64 {
        extrapolate_linear(total_so_far, reference_date)
    }
}
