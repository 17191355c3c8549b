//! Error types for the rostering KPI engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The taxonomy is deliberately shallow: missing or out-of-range schedule
//! data degrades to documented zero/empty results inside the calculations,
//! so the only conditions that surface as errors are invalid caller input
//! (unparsable dates, impossible year/month arguments) and holiday
//! configuration problems.

use thiserror::Error;

/// The main error type for the rostering KPI engine.
///
/// # Example
///
/// ```
/// use roster_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/holidays.yaml".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/holidays.yaml"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse or validation error.
        message: String,
    },

    /// Caller-supplied input was invalid (unparsable date or time,
    /// impossible year/month pair). Dates are expected to be pre-validated
    /// by the producer, so a whole batch is rejected rather than partially
    /// coerced.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The field or argument that was invalid.
        field: String,
        /// A description of what made it invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/holidays.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/holidays.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::InvalidInput {
            field: "month".to_string(),
            message: "2025-13 is not a valid calendar month".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input for 'month': 2025-13 is not a valid calendar month"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_input() -> EngineResult<()> {
            Err(EngineError::InvalidInput {
                field: "date".to_string(),
                message: "not a date".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_input()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
