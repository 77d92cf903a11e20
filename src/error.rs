//! Custom error types for Payday
//!
//! This module defines the error hierarchy for the engine and its front end
//! using thiserror for ergonomic error definitions.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::UserId;

/// The main error type for Payday operations
#[derive(Error, Debug)]
pub enum PaydayError {
    /// The user has no pay schedule, so no period can be resolved
    #[error("No pay schedule configured for user {user}")]
    MissingSchedule { user: UserId },

    /// A resolved period did not satisfy start < end
    #[error("Invalid date range: {start} is not before {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// An input record carried a negative monetary amount
    #[error("Negative amount for {entity} '{identifier}': {amount}")]
    NegativeAmount {
        entity: &'static str,
        identifier: String,
        amount: i64,
    },

    /// Validation errors for input records
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PaydayError {
    /// Create a negative amount error
    pub fn negative_amount(entity: &'static str, identifier: impl Into<String>, amount: i64) -> Self {
        Self::NegativeAmount {
            entity,
            identifier: identifier.into(),
            amount,
        }
    }

    /// Check if this is a missing schedule error
    pub fn is_missing_schedule(&self) -> bool {
        matches!(self, Self::MissingSchedule { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NegativeAmount { .. })
    }
}

impl From<std::io::Error> for PaydayError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PaydayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for PaydayError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for PaydayError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for Payday operations
pub type PaydayResult<T> = Result<T, PaydayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PaydayError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_negative_amount_error() {
        let err = PaydayError::negative_amount("Budget", "Groceries", -500);
        assert_eq!(
            err.to_string(),
            "Negative amount for Budget 'Groceries': -500"
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_invalid_date_range_error() {
        let err = PaydayError::InvalidDateRange {
            start: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid date range: 2024-03-15 is not before 2024-03-01"
        );
    }

    #[test]
    fn test_missing_schedule_error() {
        let err = PaydayError::MissingSchedule {
            user: UserId::new(),
        };
        assert!(err.is_missing_schedule());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PaydayError = io_err.into();
        assert!(matches!(err, PaydayError::Io(_)));
    }
}
