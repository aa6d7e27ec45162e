//! Date-keyed series and item accessors.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Result, RunrateError};

/// ISO-8601 calendar date format used for series keys.
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an ISO-8601 calendar date in canonical `YYYY-MM-DD` form.
///
/// Surrounding whitespace, unpadded fields and other layouts are rejected.
///
/// # Errors
///
/// Returns [`RunrateError::InvalidDate`] if the input is not a valid calendar day.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate> {
    let canonical = input.len() == 10
        && input.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !canonical {
        return Err(RunrateError::invalid_date(input, "expected YYYY-MM-DD"));
    }
    NaiveDate::parse_from_str(input, ISO_DATE_FORMAT)
        .map_err(|e| RunrateError::invalid_date(input, e.to_string()))
}

/// A single dated observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Calendar day of the observation.
    pub date: NaiveDate,
    /// Observed value.
    pub value: f64,
}

impl DataPoint {
    /// Creates a new data point.
    #[must_use]
    pub const fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

impl From<(NaiveDate, f64)> for DataPoint {
    fn from((date, value): (NaiveDate, f64)) -> Self {
        Self::new(date, value)
    }
}

/// Extracts a numeric value from a series item.
///
/// Implemented for every `Fn(&T) -> f64`, so closures work directly:
///
/// ```
/// use runrate_types::{DataPoint, ValueAccessor};
///
/// let accessor = |p: &DataPoint| p.value;
/// let point = DataPoint::new(chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 4.5);
/// assert_eq!(accessor.value(&point), 4.5);
/// ```
pub trait ValueAccessor<T> {
    /// Returns the numeric value carried by `item`.
    fn value(&self, item: &T) -> f64;
}

impl<T, F> ValueAccessor<T> for F
where
    F: Fn(&T) -> f64,
{
    fn value(&self, item: &T) -> f64 {
        self(item)
    }
}

/// Extracts the calendar day of a series item.
///
/// Used to re-key a sequential collection into a [`DaySeries`]. Implemented for
/// every `Fn(&T) -> Result<NaiveDate>`.
pub trait DateAccessor<T> {
    /// Returns the calendar day of `item`.
    ///
    /// # Errors
    ///
    /// Returns [`RunrateError::InvalidDate`] if the item carries no valid date.
    fn date(&self, item: &T) -> Result<NaiveDate>;
}

impl<T, F> DateAccessor<T> for F
where
    F: Fn(&T) -> Result<NaiveDate>,
{
    fn date(&self, item: &T) -> Result<NaiveDate> {
        self(item)
    }
}

/// Ordered mapping from calendar day to an item of arbitrary type.
///
/// Keys are parsed dates, never raw strings, so ordering and month
/// comparisons operate on real calendar values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DaySeries<T> {
    entries: BTreeMap<NaiveDate, T>,
}

impl<T> DaySeries<T> {
    /// Creates an empty series.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Builds a series from ISO-8601 date strings (`YYYY-MM-DD`) and items.
    ///
    /// Later duplicates overwrite earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`RunrateError::InvalidDate`] on the first malformed key.
    pub fn from_iso_entries<K, I>(entries: I) -> Result<Self>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, T)>,
    {
        let mut series = Self::new();
        for (key, item) in entries {
            series.insert(parse_iso_date(key.as_ref())?, item);
        }
        Ok(series)
    }

    /// Re-keys a sequential collection by the date each item carries.
    ///
    /// Later duplicates overwrite earlier ones; callers must ensure uniqueness
    /// if that matters.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `accessor`.
    pub fn from_records<I, D>(items: I, accessor: &D) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        D: DateAccessor<T> + ?Sized,
    {
        let mut series = Self::new();
        for item in items {
            let date = accessor.date(&item)?;
            series.insert(date, item);
        }
        Ok(series)
    }

    /// Inserts an item, returning the one it replaced, if any.
    pub fn insert(&mut self, date: NaiveDate, item: T) -> Option<T> {
        self.entries.insert(date, item)
    }

    /// Returns the item recorded for `date`.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&T> {
        self.entries.get(&date)
    }

    /// Returns the number of days in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the series is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the earliest date in the series.
    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.entries.keys().next().copied()
    }

    /// Returns the latest date in the series.
    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.entries.keys().next_back().copied()
    }

    /// Iterates over `(date, item)` pairs in date order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (NaiveDate, &T)> + '_ {
        self.entries.iter().map(|(date, item)| (*date, item))
    }

    /// Returns the value recorded for `date` via `accessor`, or `0.0` if absent.
    #[must_use]
    pub fn value_or_zero<V>(&self, date: NaiveDate, accessor: &V) -> f64
    where
        V: ValueAccessor<T> + ?Sized,
    {
        self.get(date).map_or(0.0, |item| accessor.value(item))
    }

    /// Sums every item's value via `accessor`.
    #[must_use]
    pub fn total<V>(&self, accessor: &V) -> f64
    where
        V: ValueAccessor<T> + ?Sized,
    {
        self.entries.values().map(|item| accessor.value(item)).sum()
    }
}

impl DaySeries<f64> {
    /// Builds a plain numeric series from data points.
    #[must_use]
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = DataPoint>,
    {
        points.into_iter().map(|p| (p.date, p.value)).collect()
    }
}

impl<T> Default for DaySeries<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(NaiveDate, T)> for DaySeries<T> {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<(NaiveDate, T)> for DaySeries<T> {
    fn extend<I: IntoIterator<Item = (NaiveDate, T)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}
