//! Relative change classification results.

use serde::{Deserialize, Serialize};

/// Direction of an observed value relative to its reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Observed value is above the tolerance band.
    Up,
    /// Observed value is below the tolerance band.
    Down,
    /// Observed value is within the tolerance band.
    Equal,
}

impl Direction {
    /// Returns the direction as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Equal => "equal",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of comparing an observed value with a reference value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChangeResult {
    /// Percentage change, rounded to two decimals.
    pub value: f64,
    /// Classification against the equality band.
    pub direction: Direction,
}

impl ChangeResult {
    /// Creates a new change result.
    #[must_use]
    pub const fn new(value: f64, direction: Direction) -> Self {
        Self { value, direction }
    }

    /// Returns true if the change was classified as [`Direction::Equal`].
    #[must_use]
    pub const fn is_equal(&self) -> bool {
        matches!(self.direction, Direction::Equal)
    }
}

impl std::fmt::Display for ChangeResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}% ({})", self.value, self.direction)
    }
}
