//! Day-of-week seasonal projection.
//!
//! The estimate is the month-to-date actual plus, for each remaining day of
//! the month, the average value previously observed on that weekday.
//!
//! Early in the month there is too little in-month history to average, so a
//! trailing window of the days just before the reference date is sampled
//! instead. Window days that fall in the previous month are read from the
//! fallback series and only inform the averages; they are never counted as
//! actual month-to-date value. Later in the month every entry whose day of
//! month precedes the reference day is sampled and counted as actual.

use chrono::{Datelike, Days, NaiveDate};
use runrate_calendar::{DayTypeCalendar, MonthCalendar};
use runrate_types::{
    DEFAULT_FALLBACK_WINDOW_DAYS, DateAccessor, DayType, DaySeries, ProjectionConfig,
    RemainingDayTypeCounts, Result, ValueAccessor, is_same_month,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::DayTypeProfile;

/// Which samples fed the day-of-week averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionBasis {
    /// The days immediately before the reference date, possibly spilling into
    /// the fallback period.
    TrailingWindow,
    /// Entries whose day of month precedes the reference day.
    MonthToDate,
}

impl ProjectionBasis {
    /// Returns the basis as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TrailingWindow => "trailing_window",
            Self::MonthToDate => "month_to_date",
        }
    }
}

impl std::fmt::Display for ProjectionBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Breakdown of a seasonal month-end estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalProjection {
    /// Date the projection was made as of.
    pub reference_date: NaiveDate,
    /// Samples used for the averages.
    pub basis: ProjectionBasis,
    /// Sum of sampled values counted as already realized.
    pub actual: f64,
    /// Sum of per-weekday averages over the remaining days.
    pub projected: f64,
    /// Per-weekday samples.
    pub profile: DayTypeProfile,
    /// Days of each type left after the reference date.
    pub remaining: RemainingDayTypeCounts,
}

impl SeasonalProjection {
    /// Returns the full-month estimate (`actual + projected`).
    #[must_use]
    pub fn total(&self) -> f64 {
        self.actual + self.projected
    }

    /// Returns the day types with remaining days but no samples.
    ///
    /// These contribute nothing to [`Self::projected`], so a non-empty result
    /// means the estimate is conservative.
    pub fn unprojected_day_types(&self) -> impl Iterator<Item = DayType> + '_ {
        self.profile
            .missing_day_types()
            .filter(|day_type| self.remaining.get(*day_type) > 0)
    }
}

/// Seasonal month-end extrapolator.
///
/// Stateless apart from its calendar and trailing window length; one instance
/// can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonalExtrapolator<C = MonthCalendar> {
    calendar: C,
    window_days: u32,
}

impl SeasonalExtrapolator<MonthCalendar> {
    /// Creates an extrapolator using the Gregorian calendar and a 7-day window.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_calendar(MonthCalendar)
    }
}

impl Default for SeasonalExtrapolator<MonthCalendar> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: DayTypeCalendar> SeasonalExtrapolator<C> {
    /// Creates an extrapolator with a custom calendar and a 7-day window.
    #[must_use]
    pub const fn with_calendar(calendar: C) -> Self {
        Self {
            calendar,
            window_days: DEFAULT_FALLBACK_WINDOW_DAYS,
        }
    }

    /// Creates an extrapolator with a custom calendar and the configured window.
    ///
    /// # Errors
    ///
    /// Returns [`runrate_types::RunrateError::InvalidConfig`] if `config` does
    /// not pass [`ProjectionConfig::validate`].
    pub fn from_config(calendar: C, config: &ProjectionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            calendar,
            window_days: config.fallback_window_days,
        })
    }

    /// Sets the trailing window length.
    ///
    /// References on or before this day of the month use the trailing window.
    ///
    /// # Errors
    ///
    /// Returns [`runrate_types::RunrateError::InvalidConfig`] unless
    /// `window_days` is between 1 and [`runrate_types::MAX_FALLBACK_WINDOW_DAYS`].
    pub fn with_window_days(mut self, window_days: u32) -> Result<Self> {
        ProjectionConfig {
            fallback_window_days: window_days,
            ..ProjectionConfig::default()
        }
        .validate()?;
        self.window_days = window_days;
        Ok(self)
    }

    /// Returns the trailing window length in days.
    #[must_use]
    pub const fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Estimates the full-month total as of `reference_date`.
    ///
    /// Returns `0.0` when both series are empty.
    #[must_use]
    pub fn extrapolate<T, V>(
        &self,
        current: &DaySeries<T>,
        fallback: &DaySeries<T>,
        value: V,
        reference_date: NaiveDate,
    ) -> f64
    where
        V: ValueAccessor<T>,
    {
        self.project(current, fallback, value, reference_date).total()
    }

    /// Like [`Self::extrapolate`], but keys sequential records by `date` first.
    ///
    /// # Errors
    ///
    /// Returns [`runrate_types::RunrateError::InvalidDate`] if `date` fails
    /// for any record.
    pub fn extrapolate_records<T, V, D>(
        &self,
        current: &[T],
        fallback: &[T],
        value: V,
        date: D,
        reference_date: NaiveDate,
    ) -> Result<f64>
    where
        V: ValueAccessor<T>,
        D: DateAccessor<T>,
    {
        self.project_records(current, fallback, value, date, reference_date)
            .map(|projection| projection.total())
    }

    /// Keys sequential records by `date` and returns the full projection.
    ///
    /// Records sharing a date overwrite one another; the last one wins.
    ///
    /// # Errors
    ///
    /// Returns [`runrate_types::RunrateError::InvalidDate`] if `date` fails
    /// for any record.
    pub fn project_records<T, V, D>(
        &self,
        current: &[T],
        fallback: &[T],
        value: V,
        date: D,
        reference_date: NaiveDate,
    ) -> Result<SeasonalProjection>
    where
        V: ValueAccessor<T>,
        D: DateAccessor<T>,
    {
        let by_date = |item: &&T| date.date(*item);
        let current = DaySeries::from_records(current, &by_date)?;
        let fallback = DaySeries::from_records(fallback, &by_date)?;

        Ok(self.project(
            &current,
            &fallback,
            |item: &&T| value.value(*item),
            reference_date,
        ))
    }

    /// Estimates the full-month total and returns its breakdown.
    #[must_use]
    pub fn project<T, V>(
        &self,
        current: &DaySeries<T>,
        fallback: &DaySeries<T>,
        value: V,
        reference_date: NaiveDate,
    ) -> SeasonalProjection
    where
        V: ValueAccessor<T>,
    {
        let (basis, actual, profile) = if reference_date.day() <= self.window_days {
            let (actual, profile) =
                self.sample_trailing_window(current, fallback, &value, reference_date);
            (ProjectionBasis::TrailingWindow, actual, profile)
        } else {
            let (actual, profile) = sample_month_to_date(current, &value, reference_date);
            (ProjectionBasis::MonthToDate, actual, profile)
        };

        let remaining = self.calendar.remaining_day_type_counts(reference_date);

        let mut projected = 0.0;
        for (day_type, stats) in profile.iter() {
            // Unsampled weekdays are left out rather than guessed.
            let Some(average) = stats.average() else {
                continue;
            };
            let days_left = remaining.get(day_type);
            projected += average * f64::from(days_left);
            trace!(%day_type, average, days_left, "projected day type");
        }

        let projection = SeasonalProjection {
            reference_date,
            basis,
            actual,
            projected,
            profile,
            remaining,
        };

        debug!(
            %reference_date,
            %basis,
            actual,
            projected,
            samples = profile.sample_count(),
            unprojected = projection.unprojected_day_types().count(),
            "seasonal projection"
        );

        projection
    }

    /// Samples the `window_days` calendar days before `reference_date`.
    fn sample_trailing_window<T, V>(
        &self,
        current: &DaySeries<T>,
        fallback: &DaySeries<T>,
        value: &V,
        reference_date: NaiveDate,
    ) -> (f64, DayTypeProfile)
    where
        V: ValueAccessor<T>,
    {
        let mut actual = 0.0;
        let mut profile = DayTypeProfile::new();

        for offset in 1..=u64::from(self.window_days) {
            let Some(day) = reference_date.checked_sub_days(Days::new(offset)) else {
                break;
            };

            let sample = if is_same_month(day, reference_date) {
                let sample = current.value_or_zero(day, value);
                actual += sample;
                sample
            } else {
                fallback.value_or_zero(day, value)
            };

            trace!(%day, sample, "trailing window sample");
            profile.record(DayType::of(day), sample);
        }

        (actual, profile)
    }
}

/// Samples every entry of `current` whose day of month precedes the reference day.
///
/// Only the day of month is compared, so entries from other months count too.
fn sample_month_to_date<T, V>(
    current: &DaySeries<T>,
    value: &V,
    reference_date: NaiveDate,
) -> (f64, DayTypeProfile)
where
    V: ValueAccessor<T>,
{
    let mut actual = 0.0;
    let mut profile = DayTypeProfile::new();

    let cutoff = reference_date.day();
    for (day, item) in current.iter().filter(|(day, _)| day.day() < cutoff) {
        let sample = value.value(item);
        actual += sample;
        profile.record(DayType::of(day), sample);
    }

    (actual, profile)
}

/// Estimates the full-month total with the Gregorian calendar and a 7-day window.
///
/// ```
/// use chrono::NaiveDate;
/// use runrate_extrapolate::extrapolate_seasonal;
/// use runrate_types::DaySeries;
///
/// let reference = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let empty = DaySeries::<f64>::new();
/// assert_eq!(extrapolate_seasonal(&empty, &empty, |v: &f64| *v, reference), 0.0);
/// ```
#[must_use]
pub fn extrapolate_seasonal<T, V>(
    current: &DaySeries<T>,
    fallback: &DaySeries<T>,
    value: V,
    reference_date: NaiveDate,
) -> f64
where
    V: ValueAccessor<T>,
{
    SeasonalExtrapolator::new().extrapolate(current, fallback, value, reference_date)
}

/// Record-based variant of [`extrapolate_seasonal`].
///
/// # Errors
///
/// Returns [`runrate_types::RunrateError::InvalidDate`] if `date` fails for
/// any record.
pub fn extrapolate_seasonal_records<T, V, D>(
    current: &[T],
    fallback: &[T],
    value: V,
    date: D,
    reference_date: NaiveDate,
) -> Result<f64>
where
    V: ValueAccessor<T>,
    D: DateAccessor<T>,
{
    SeasonalExtrapolator::new().extrapolate_records(current, fallback, value, date, reference_date)
}
