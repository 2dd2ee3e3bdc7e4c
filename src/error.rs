//! Custom error types for fintrack
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Month;

/// The main error type for fintrack operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Nothing has been recorded for the requested month
    #[error("{what} data is not available for {month}")]
    DataUnavailable { what: &'static str, month: Month },

    /// A month name or number could not be resolved
    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    /// Amount text could not be parsed
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The snapshot file could not be opened, read or written
    #[error("Persistence unavailable: {0}")]
    PersistenceUnavailable(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Report export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl TrackerError {
    /// Create a "data unavailable" error for income
    pub fn income_unavailable(month: Month) -> Self {
        Self::DataUnavailable {
            what: "Monthly income",
            month,
        }
    }

    /// Create a "data unavailable" error for expenses
    pub fn expenses_unavailable(month: Month) -> Self {
        Self::DataUnavailable {
            what: "Monthly expenses",
            month,
        }
    }

    /// Check if this is a "data unavailable" error
    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, Self::DataUnavailable { .. })
    }

    /// Check if this is an invalid month error
    pub fn is_invalid_month(&self) -> bool {
        matches!(self, Self::InvalidMonth(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for fintrack operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_data_unavailable_error() {
        let err = TrackerError::income_unavailable(Month::APRIL);
        assert_eq!(
            err.to_string(),
            "Monthly income data is not available for April"
        );
        assert!(err.is_data_unavailable());
        assert!(!err.is_invalid_month());
    }

    #[test]
    fn test_invalid_month_error() {
        let err = TrackerError::InvalidMonth("NotAMonth".into());
        assert_eq!(err.to_string(), "Invalid month: NotAMonth");
        assert!(err.is_invalid_month());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let tracker_err: TrackerError = io_err.into();
        assert!(matches!(tracker_err, TrackerError::Io(_)));
    }
}
