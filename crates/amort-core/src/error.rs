//! Error types for the Amort core library.

use thiserror::Error;

/// A specialized Result type for Amort core operations.
pub type AmortResult<T> = Result<T, AmortError>;

/// The main error type for Amort core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmortError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },
}

impl AmortError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }
}
