//! Projection configuration.

use serde::{Deserialize, Serialize};

use crate::{Result, RunrateError};

/// Default half-width of the "equal" band, in percent of the reference.
pub const DEFAULT_EQUALITY_THRESHOLD_PERCENT: f64 = 1.0;

/// Default number of days at the start of a month that are projected from a
/// trailing window instead of month-to-date data.
pub const DEFAULT_FALLBACK_WINDOW_DAYS: u32 = 7;

/// Largest accepted trailing window.
pub const MAX_FALLBACK_WINDOW_DAYS: u32 = 28;

/// Tunables shared by the change calculator and the extrapolators.
///
/// Every field is optional in serialized form and falls back to its default.
///
/// ```
/// use runrate_types::ProjectionConfig;
///
/// let config = ProjectionConfig::from_json(r#"{ "equality_threshold_percent": 2.5 }"#).unwrap();
/// assert_eq!(config.equality_threshold_percent, 2.5);
/// assert_eq!(config.fallback_window_days, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectionConfig {
    /// Half-width of the "equal" band, in percent of the reference value.
    pub equality_threshold_percent: f64,
    /// Days at the start of a month that use the trailing window.
    pub fallback_window_days: u32,
}

impl ProjectionConfig {
    /// Parses and validates a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is out of range.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`RunrateError::InvalidConfig`] describing the first bad value.
    pub fn validate(&self) -> Result<()> {
        if !self.equality_threshold_percent.is_finite() || self.equality_threshold_percent < 0.0 {
            return Err(RunrateError::InvalidConfig(format!(
                "equality_threshold_percent must be a non-negative number, got {}",
                self.equality_threshold_percent
            )));
        }
        if !(1..=MAX_FALLBACK_WINDOW_DAYS).contains(&self.fallback_window_days) {
            return Err(RunrateError::InvalidConfig(format!(
                "fallback_window_days must be between 1 and {MAX_FALLBACK_WINDOW_DAYS}, got {}",
                self.fallback_window_days
            )));
        }
        Ok(())
    }
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            equality_threshold_percent: DEFAULT_EQUALITY_THRESHOLD_PERCENT,
            fallback_window_days: DEFAULT_FALLBACK_WINDOW_DAYS,
        }
    }
}
