//! Percentage change with a symmetric equality band.

use runrate_types::{
    ChangeResult, DEFAULT_EQUALITY_THRESHOLD_PERCENT, Direction, ProjectionConfig, Result,
};
use tracing::trace;

/// Significant digits kept before the final rounding step.
const PRE_ROUND_DIGITS: i32 = 15;

/// Rounds to two decimal places, half away from zero.
///
/// The scaled value is first rounded to 15 significant digits so that decimal
/// halves lost to binary representation still round up: `0.285` gives `0.29`
/// and `1.005` gives `1.01`, not `0.28` and `1.0`.
#[must_use]
pub fn round_to_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() || scaled == 0.0 || scaled.abs() >= 10f64.powi(PRE_ROUND_DIGITS) {
        return scaled.round() / 100.0;
    }

    #[allow(clippy::cast_possible_truncation)]
    let magnitude = scaled.abs().log10().floor() as i32;
    let factor = 10f64.powi(PRE_ROUND_DIGITS - 1 - magnitude);
    let pre_rounded = if factor.is_finite() {
        (scaled * factor).round() / factor
    } else {
        scaled
    };
    pre_rounded.round() / 100.0
}

/// Classifies `data` against `reference` as up, down or equal.
///
/// The "equal" band spans `reference ± |reference| * threshold / 100`, bounds
/// included, so it stays centered on the reference even when the reference is
/// negative. A zero reference yields a value of `0.0` and is `Up` only when
/// `data` is positive.
///
/// ```
/// use runrate_change::compute_change;
/// use runrate_types::Direction;
///
/// let result = compute_change(110.0, 100.0, 1.0);
/// assert_eq!(result.value, 10.0);
/// assert_eq!(result.direction, Direction::Up);
/// ```
#[must_use]
pub fn compute_change(data: f64, reference: f64, equality_threshold_percent: f64) -> ChangeResult {
    if reference == 0.0 {
        let direction = if data > 0.0 {
            Direction::Up
        } else {
            Direction::Equal
        };
        return ChangeResult::new(0.0, direction);
    }

    let value = round_to_cents((data - reference) / reference * 100.0);

    let margin = reference.abs() * equality_threshold_percent / 100.0;
    let lower_bound = reference - margin;
    let upper_bound = reference + margin;

    let direction = if data < lower_bound {
        Direction::Down
    } else if data > upper_bound {
        Direction::Up
    } else {
        Direction::Equal
    };

    trace!(data, reference, lower_bound, upper_bound, value, %direction, "classified change");
    ChangeResult::new(value, direction)
}

/// Stateless change calculator bound to an equality threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeCalculator {
    /// Half-width of the "equal" band, in percent of the reference.
    equality_threshold_percent: f64,
}

impl ChangeCalculator {
    /// Creates a calculator with the given equality threshold (in percent).
    ///
    /// The threshold is used as given. A negative or NaN threshold makes the
    /// "equal" band empty; use [`ChangeCalculator::try_new`] to reject it.
    #[must_use]
    pub const fn new(equality_threshold_percent: f64) -> Self {
        Self {
            equality_threshold_percent,
        }
    }

    /// Creates a calculator, rejecting a negative or non-finite threshold.
    ///
    /// # Errors
    ///
    /// Returns [`runrate_types::RunrateError::InvalidConfig`] for a bad threshold.
    pub fn try_new(equality_threshold_percent: f64) -> Result<Self> {
        Self::from_config(&ProjectionConfig {
            equality_threshold_percent,
            ..ProjectionConfig::default()
        })
    }

    /// Creates a calculator from a validated projection configuration.
    ///
    /// # Errors
    ///
    /// Returns [`runrate_types::RunrateError::InvalidConfig`] if `config` fails
    /// [`ProjectionConfig::validate`].
    pub fn from_config(config: &ProjectionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.equality_threshold_percent))
    }

    /// Returns the equality threshold in percent.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.equality_threshold_percent
    }

    /// Compares `data` with `reference`.
    #[must_use]
    pub fn compute(&self, data: f64, reference: f64) -> ChangeResult {
        compute_change(data, reference, self.equality_threshold_percent)
    }
}

impl Default for ChangeCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_EQUALITY_THRESHOLD_PERCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use runrate_types::RunrateError;

    #[test]
    fn test_increase_above_band() {
        let result = ChangeCalculator::default().compute(110.0, 100.0);
        assert_relative_eq!(result.value, 10.0);
        assert_eq!(result.direction, Direction::Up);
    }

    #[test]
    fn test_within_default_band() {
        let result = ChangeCalculator::default().compute(101.0, 100.0);
        assert_relative_eq!(result.value, 1.0);
        assert_eq!(result.direction, Direction::Equal);
    }

    #[test]
    fn test_decrease_below_band() {
        let result = ChangeCalculator::default().compute(80.0, 100.0);
        assert_relative_eq!(result.value, -20.0);
        assert_eq!(result.direction, Direction::Down);
    }

    #[test]
    fn test_zero_reference() {
        let up = compute_change(50.0, 0.0, 1.0);
        assert_relative_eq!(up.value, 0.0);
        assert_eq!(up.direction, Direction::Up);

        let flat = compute_change(0.0, 0.0, 1.0);
        assert_eq!(flat.direction, Direction::Equal);

        // Negative data against a zero reference is not reported as down.
        let negative = compute_change(-50.0, 0.0, 1.0);
        assert_relative_eq!(negative.value, 0.0);
        assert_eq!(negative.direction, Direction::Equal);
    }

    #[test]
    fn test_band_bounds_are_inclusive() {
        assert_eq!(compute_change(101.0, 100.0, 1.0).direction, Direction::Equal);
        assert_eq!(compute_change(99.0, 100.0, 1.0).direction, Direction::Equal);
        assert_eq!(compute_change(101.5, 100.0, 1.0).direction, Direction::Up);
        assert_eq!(compute_change(98.5, 100.0, 1.0).direction, Direction::Down);
    }

    #[test]
    fn test_band_follows_negative_reference() {
        // Band is -101..=-99, centered on the reference rather than zero.
        let within = compute_change(-101.0, -100.0, 1.0);
        assert_eq!(within.direction, Direction::Equal);
        assert_relative_eq!(within.value, 1.0);

        // Falling further below a negative reference is a decrease even
        // though the signed percentage is positive.
        let lower = compute_change(-120.0, -100.0, 1.0);
        assert_eq!(lower.direction, Direction::Down);
        assert_relative_eq!(lower.value, 20.0);

        let higher = compute_change(-80.0, -100.0, 1.0);
        assert_eq!(higher.direction, Direction::Up);
        assert_relative_eq!(higher.value, -20.0);
    }

    #[test]
    fn test_value_rounded_to_two_decimals() {
        let result = compute_change(1.0, 3.0, 1.0);
        assert_relative_eq!(result.value, -66.67);

        let result = compute_change(200.0, 300.0, 1.0);
        assert_relative_eq!(result.value, -33.33);
    }

    #[test]
    fn test_value_matches_formula() {
        let pairs = [(5.0, 3.0), (-7.5, 12.25), (1234.5, 999.0), (0.0, -4.0)];
        for (data, reference) in pairs {
            let expected = round_to_cents((data - reference) / reference * 100.0);
            assert_relative_eq!(compute_change(data, reference, 1.0).value, expected);
        }
    }

    #[test]
    fn test_zero_threshold() {
        let calculator = ChangeCalculator::new(0.0);
        assert_eq!(calculator.compute(100.0, 100.0).direction, Direction::Equal);
        assert_eq!(calculator.compute(100.01, 100.0).direction, Direction::Up);
    }

    #[test]
    fn test_wide_threshold() {
        let calculator = ChangeCalculator::new(25.0);
        assert_eq!(calculator.compute(120.0, 100.0).direction, Direction::Equal);
        assert_eq!(calculator.compute(76.0, 100.0).direction, Direction::Equal);
        assert_eq!(calculator.compute(126.0, 100.0).direction, Direction::Up);
    }

    #[test]
    fn test_from_config() {
        let config = ProjectionConfig {
            equality_threshold_percent: 5.0,
            ..ProjectionConfig::default()
        };
        let calculator = ChangeCalculator::from_config(&config).unwrap();
        assert_relative_eq!(calculator.threshold(), 5.0);
        assert_eq!(calculator.compute(104.0, 100.0).direction, Direction::Equal);
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let negative = ProjectionConfig {
            equality_threshold_percent: -1.0,
            ..ProjectionConfig::default()
        };
        assert!(matches!(
            ChangeCalculator::from_config(&negative),
            Err(RunrateError::InvalidConfig(_))
        ));
        assert!(ChangeCalculator::try_new(f64::NAN).is_err());
        assert!(ChangeCalculator::try_new(-0.5).is_err());
        assert_relative_eq!(ChangeCalculator::try_new(2.0).unwrap().threshold(), 2.0);
    }

    #[test]
    fn test_decimal_halves_round_up() {
        assert_eq!(round_to_cents(0.285), 0.29);
        assert_eq!(round_to_cents(1.005), 1.01);
        assert_eq!(round_to_cents(-1.005), -1.01);
        assert_eq!(round_to_cents(2.675), 2.68);
        assert_eq!(round_to_cents(28.5), 28.5);
        assert_eq!(round_to_cents(0.0), 0.0);
        assert_eq!(round_to_cents(1e-320), 0.0);
        assert!(round_to_cents(f64::NAN).is_nan());
    }
}
