//! Error types for the Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll computation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Payroll Engine.
///
/// All fallible operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ValidationError {
///     field: "total_hours".to_string(),
///     message: "must not be negative".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid value for 'total_hours': must not be negative");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or contained invalid values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No tax table is effective on the given date.
    #[error("No tax rates effective on {date}")]
    RateNotFound {
        /// The date for which rates were requested.
        date: NaiveDate,
    },

    /// An input value was outside the domain the calculation accepts.
    #[error("Invalid value for '{field}': {message}")]
    ValidationError {
        /// The name of the offending input.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building a [`EngineError::ValidationError`].
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// A [`EngineError::CalculationError`] for arithmetic that left the
    /// range of [`rust_decimal::Decimal`].
    pub fn overflow(operation: &str) -> Self {
        EngineError::CalculationError {
            message: format!("decimal overflow computing {}", operation),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/jurisdiction.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/jurisdiction.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/rates/2023-01-01.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/rates/2023-01-01.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_rate_not_found_displays_date() {
        let error = EngineError::RateNotFound {
            date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
        };
        assert_eq!(error.to_string(), "No tax rates effective on 2020-01-01");
    }

    #[test]
    fn test_validation_error_displays_field_and_message() {
        let error = EngineError::validation("gross_pay", "must not be negative");
        assert_eq!(
            error.to_string(),
            "Invalid value for 'gross_pay': must not be negative"
        );
    }

    #[test]
    fn test_calculation_error_displays_message() {
        let error = EngineError::CalculationError {
            message: "decimal overflow".to_string(),
        };
        assert_eq!(error.to_string(), "Calculation error: decimal overflow");
    }

    #[test]
    fn test_overflow_names_operation() {
        let error = EngineError::overflow("gross_pay");
        assert!(matches!(error, EngineError::CalculationError { .. }));
        assert_eq!(
            error.to_string(),
            "Calculation error: decimal overflow computing gross_pay"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_validation_error() -> EngineResult<()> {
            Err(EngineError::validation("total_hours", "must not be negative"))
        }

        fn propagates_error() -> EngineResult<()> {
            returns_validation_error()?;
            Ok(())
        }

        assert!(matches!(
            propagates_error(),
            Err(EngineError::ValidationError { .. })
        ));
    }
}
