//! Month-end projection of month-to-date metrics for runrate.
//!
//! This crate turns a partial month of data into a full-month estimate:
//!
//! - [`LinearExtrapolator`] - Assumes every day contributes equally
//! - [`SeasonalExtrapolator`] - Weights the remaining days by day-of-week averages
//! - [`SeasonalProjection`] - Breakdown of a seasonal estimate
//! - [`DayTypeProfile`] - Per-weekday sums, counts and averages

#![doc(issue_tracker_base_url = "https://github.com/runrate-rs/runrate/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod linear;
mod profile;
mod seasonal;

pub use linear::{LinearExtrapolator, extrapolate_linear};
pub use profile::{DayTypeProfile, DayTypeStats};
pub use seasonal::{
    ProjectionBasis, SeasonalExtrapolator, SeasonalProjection, extrapolate_seasonal,
    extrapolate_seasonal_records,
};
