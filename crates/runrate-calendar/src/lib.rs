//! Day-of-week calendar arithmetic for runrate projections.
//!
//! Seasonal projections need to know how many days of each weekday are left
//! in a month. This crate defines that contract as [`DayTypeCalendar`] and
//! ships [`MonthCalendar`], a plain Gregorian implementation.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use runrate_calendar::{DayTypeCalendar, MonthCalendar};
//! use runrate_types::DayType;
//!
//! let reference = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let remaining = MonthCalendar.remaining_day_type_counts(reference);
//!
//! // January 16-31, 2024 holds three Tuesdays and two Mondays.
//! assert_eq!(remaining.get(DayType::Tuesday), 3);
//! assert_eq!(remaining.get(DayType::Monday), 2);
//! assert_eq!(remaining.total(), 16);
//! ```

#![doc(issue_tracker_base_url = "https://github.com/runrate-rs/runrate/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use chrono::{Datelike, NaiveDate};
use runrate_types::{DayType, RemainingDayTypeCounts, last_day_of_month};

/// Source of remaining day-of-week counts for a reference date.
///
/// Implementations may account for holidays or business calendars; the only
/// requirement is that the counts cover the days strictly after `reference`
/// through the end of its month.
pub trait DayTypeCalendar {
    /// Returns how many days of each type occur after `reference` in its month.
    fn remaining_day_type_counts(&self, reference: NaiveDate) -> RemainingDayTypeCounts;
}

impl<C: DayTypeCalendar + ?Sized> DayTypeCalendar for &C {
    fn remaining_day_type_counts(&self, reference: NaiveDate) -> RemainingDayTypeCounts {
        (**self).remaining_day_type_counts(reference)
    }
}

/// Gregorian calendar counting every day, with no holiday adjustments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthCalendar;

impl DayTypeCalendar for MonthCalendar {
    fn remaining_day_type_counts(&self, reference: NaiveDate) -> RemainingDayTypeCounts {
        match reference.succ_opt() {
            Some(next) => count_day_types(next, last_day_of_month(reference)),
            None => RemainingDayTypeCounts::new(),
        }
    }
}

/// Counts the days of each type in the inclusive span `start..=end`.
///
/// Returns all zeros when `start > end`.
#[must_use]
pub fn count_day_types(start: NaiveDate, end: NaiveDate) -> RemainingDayTypeCounts {
    let mut counts = RemainingDayTypeCounts::new();
    if start > end {
        return counts;
    }

    let total_days = (end - start).num_days() + 1;
    let full_weeks = (total_days / 7) as u32;
    let leftover = (total_days % 7) as u32;

    for &day_type in DayType::all() {
        counts.set(day_type, full_weeks);
    }

    // The partial week starts on `start`'s weekday and runs `leftover` days.
    let first = start.weekday().num_days_from_monday();
    for offset in 0..leftover {
        if let Some(day_type) = DayType::from_number((first + offset) % 7 + 1) {
            counts.increment(day_type);
        }
    }

    counts
}
