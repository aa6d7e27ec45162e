//! Change classification and month-end projection for reporting dashboards.
//!
//! This is a facade crate that re-exports functionality from the runrate
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use runrate_lib::prelude::*;
//! use chrono::NaiveDate;
//!
//! // Month-over-month comparison with the default ±1% band.
//! let change = ChangeCalculator::default().compute(110.0, 100.0);
//! assert_eq!(change.direction, Direction::Up);
//!
//! // Where will January end, given the first half?
//! let reference = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! assert_eq!(extrapolate_linear(1500.0, reference), 3100.0);
//!
//! let current = DaySeries::from_iso_entries([("2024-01-14", 90.0), ("2024-01-13", 80.0)])?;
//! let estimate = SeasonalExtrapolator::new().project(
//!     &current,
//!     &DaySeries::new(),
//!     |v: &f64| *v,
//!     reference,
//! );
//! println!("{} basis: {:.2}", estimate.basis, estimate.total());
//! # Ok::<(), RunrateError>(())
//! ```

#![doc(issue_tracker_base_url = "https://github.com/runrate-rs/runrate/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use runrate_types::*;

// Re-export the calendar seam
pub use runrate_calendar::{DayTypeCalendar, MonthCalendar, count_day_types};

// Re-export change classification
#[cfg(feature = "change")]
pub use runrate_change::{ChangeCalculator, compute_change, round_to_cents};

// Re-export extrapolators
#[cfg(feature = "extrapolate")]
pub use runrate_extrapolate::{
    DayTypeProfile, DayTypeStats, LinearExtrapolator, ProjectionBasis, SeasonalExtrapolator,
    SeasonalProjection, extrapolate_linear, extrapolate_seasonal, extrapolate_seasonal_records,
};

/// Prelude module for convenient imports.
///
/// ```
/// use runrate_lib::prelude::*;
/// ```
pub mod prelude {
    pub use runrate_types::{
        ChangeResult, DataPoint, DateAccessor, DaySeries, DayType, Direction, ProjectionConfig,
        RemainingDayTypeCounts, Result, RunrateError, ValueAccessor, parse_iso_date,
    };

    pub use runrate_calendar::{DayTypeCalendar, MonthCalendar};

    #[cfg(feature = "change")]
    pub use runrate_change::{ChangeCalculator, compute_change};

    #[cfg(feature = "extrapolate")]
    pub use runrate_extrapolate::{
        LinearExtrapolator, SeasonalExtrapolator, SeasonalProjection, extrapolate_linear,
        extrapolate_seasonal,
    };
}
