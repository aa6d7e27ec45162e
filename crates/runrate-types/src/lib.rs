//! Core types for runrate month-to-date projections.
//!
//! This crate provides the shared vocabulary used throughout runrate:
//!
//! - [`DayType`] - ISO-8601 weekday of a calendar date
//! - [`DataPoint`] - A single dated observation
//! - [`DaySeries`] - Date-keyed series of arbitrary items
//! - [`ValueAccessor`] / [`DateAccessor`] - Extract values and dates from items
//! - [`RemainingDayTypeCounts`] - Days of each type left in a month
//! - [`ChangeResult`] / [`Direction`] - Outcome of a relative change comparison
//! - [`ProjectionConfig`] - Tunables shared by the calculators

#![doc(issue_tracker_base_url = "https://github.com/runrate-rs/runrate/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod change;
mod config;
mod day_type;
mod error;
mod month;
mod series;

pub use change::{ChangeResult, Direction};
pub use config::{
    DEFAULT_EQUALITY_THRESHOLD_PERCENT, DEFAULT_FALLBACK_WINDOW_DAYS, MAX_FALLBACK_WINDOW_DAYS,
    ProjectionConfig,
};
pub use day_type::{DayType, DayTypeParseError, RemainingDayTypeCounts};
pub use error::{Result, RunrateError};
pub use month::{days_in_month, is_same_month, last_day_of_month};
pub use series::{DataPoint, DateAccessor, DaySeries, ValueAccessor, parse_iso_date};
