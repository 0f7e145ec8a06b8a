//! Custom error types for the calculator
//!
//! The accumulator itself never fails. Errors come from the edges: textual
//! input that is not a number, the settings file, and the operation log.

use thiserror::Error;

/// The main error type for calculator operations
#[derive(Error, Debug)]
pub enum CalculatorError {
    /// Input that is not a number, or an operation missing its argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl CalculatorError {
    /// Create an invalid argument error for text that is not a number
    pub fn not_a_number(input: impl AsRef<str>) -> Self {
        Self::InvalidArgument(format!("'{}' is not a number", input.as_ref()))
    }

    /// Check if this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<std::io::Error> for CalculatorError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CalculatorError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;
