//! ISO-8601 day types and per-type day counts.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// ISO-8601 weekday of a calendar date, numbered 1 (Monday) through 7 (Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl DayType {
    /// Returns the day type of the given date.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        date.weekday().into()
    }

    /// Returns the ISO-8601 weekday number (1 = Monday, 7 = Sunday).
    #[must_use]
    pub const fn number(&self) -> u32 {
        *self as u32
    }

    /// Returns the day type for an ISO-8601 weekday number, if in `1..=7`.
    #[must_use]
    pub const fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            7 => Some(Self::Sunday),
            _ => None,
        }
    }

    /// Returns the zero-based index (Monday = 0) used for fixed-size tables.
    #[must_use]
    pub const fn index(&self) -> usize {
        (*self as usize) - 1
    }

    /// Returns the day type as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    /// Returns all day types in ISO order.
    #[must_use]
    pub const fn all() -> &'static [Self; 7] {
        &[
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }
}

impl From<Weekday> for DayType {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
        }
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DayType {
    type Err = DayTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" | "mon" | "monday" => Ok(Self::Monday),
            "2" | "tue" | "tuesday" => Ok(Self::Tuesday),
            "3" | "wed" | "wednesday" => Ok(Self::Wednesday),
            "4" | "thu" | "thursday" => Ok(Self::Thursday),
            "5" | "fri" | "friday" => Ok(Self::Friday),
            "6" | "sat" | "saturday" => Ok(Self::Saturday),
            "7" | "sun" | "sunday" => Ok(Self::Sunday),
            _ => Err(DayTypeParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid day type string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTypeParseError(String);

impl std::fmt::Display for DayTypeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid day type '{}', expected a weekday name or a number from 1 to 7",
            self.0
        )
    }
}

impl std::error::Error for DayTypeParseError {}

/// Number of days of each [`DayType`] remaining in a month after a reference date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemainingDayTypeCounts {
    counts: [u32; 7],
}

impl RemainingDayTypeCounts {
    /// Creates counts with every day type set to zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { counts: [0; 7] }
    }

    /// Creates counts from a Monday-first array.
    #[must_use]
    pub const fn from_array(counts: [u32; 7]) -> Self {
        Self { counts }
    }

    /// Returns the count for a day type.
    #[must_use]
    pub const fn get(&self, day_type: DayType) -> u32 {
        self.counts[day_type.index()]
    }

    /// Sets the count for a day type.
    pub const fn set(&mut self, day_type: DayType, count: u32) {
        self.counts[day_type.index()] = count;
    }

    /// Increments the count for a day type by one.
    pub const fn increment(&mut self, day_type: DayType) {
        self.counts[day_type.index()] += 1;
    }

    /// Returns the total number of days across all day types.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Returns an iterator over `(day type, count)` pairs in ISO order.
    pub fn iter(&self) -> impl Iterator<Item = (DayType, u32)> + '_ {
        DayType::all().iter().map(|&day_type| (day_type, self.get(day_type)))
    }
}

impl FromIterator<(DayType, u32)> for RemainingDayTypeCounts {
    fn from_iter<I: IntoIterator<Item = (DayType, u32)>>(iter: I) -> Self {
        let mut counts = Self::new();
        for (day_type, count) in iter {
            counts.set(day_type, count);
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_type_of_date() {
        // 2024-01-01 is a Monday
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(DayType::of(date), DayType::Monday);

        let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(DayType::of(sunday), DayType::Sunday);
        assert_eq!(DayType::of(sunday).number(), 7);
    }

    #[test]
    fn test_day_type_numbering() {
        for (i, day_type) in DayType::all().iter().enumerate() {
            assert_eq!(day_type.index(), i);
            assert_eq!(DayType::from_number(day_type.number()), Some(*day_type));
        }
        assert_eq!(DayType::from_number(0), None);
        assert_eq!(DayType::from_number(8), None);
    }

    #[test]
    fn test_day_type_parse() {
        assert_eq!("Mon".parse::<DayType>().unwrap(), DayType::Monday);
        assert_eq!("7".parse::<DayType>().unwrap(), DayType::Sunday);
        assert_eq!("FRIDAY".parse::<DayType>().unwrap(), DayType::Friday);
        assert!("funday".parse::<DayType>().is_err());
    }

    #[test]
    fn test_remaining_counts() {
        let mut counts = RemainingDayTypeCounts::new();
        counts.set(DayType::Tuesday, 3);
        counts.increment(DayType::Tuesday);
        counts.increment(DayType::Sunday);

        assert_eq!(counts.get(DayType::Tuesday), 4);
        assert_eq!(counts.get(DayType::Sunday), 1);
        assert_eq!(counts.get(DayType::Monday), 0);
        assert_eq!(counts.total(), 5);

        let collected: RemainingDayTypeCounts = counts.iter().collect();
        assert_eq!(collected, counts);
    }
}
