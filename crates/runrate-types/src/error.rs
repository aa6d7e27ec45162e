//! Error types for runrate.

use thiserror::Error;

/// Result type alias for runrate operations.
pub type Result<T> = std::result::Result<T, RunrateError>;

/// Errors that can occur while preparing inputs for a projection.
#[derive(Error, Debug)]
pub enum RunrateError {
    /// A date key or accessor result could not be interpreted as a calendar day.
    #[error("Invalid date '{input}': {reason}")]
    InvalidDate {
        /// The offending input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Configuration values are out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RunrateError {
    /// Creates an [`RunrateError::InvalidDate`] error.
    #[must_use]
    pub fn invalid_date(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDate {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_date_message() {
        let err = RunrateError::invalid_date("2024-13-01", "input is out of range");
        assert_eq!(
            err.to_string(),
            "Invalid date '2024-13-01': input is out of range"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: RunrateError = json_err.into();
        assert!(matches!(err, RunrateError::Json(_)));
    }
}
