//! Error types for schedule computation.

use rust_decimal::Decimal;
use thiserror::Error;

use amort_core::{AmortError, DayCountParseError};

/// A specialized Result type for schedule operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Errors that can occur while computing an amortization schedule.
///
/// Every failure is detected before any row is emitted - a schedule is
/// either complete or absent, never partial.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A loan term is malformed or out of range.
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput {
        /// The offending field name, as it appears on the wire.
        field: &'static str,
        /// Description of what's wrong with the value.
        reason: String,
    },

    /// The day count convention identifier is not in the supported set.
    #[error("Unsupported day count convention: '{identifier}'")]
    UnsupportedConvention {
        /// The identifier that failed to parse.
        identifier: String,
    },

    /// The fixed payment cannot cover the interest accruing in a period.
    ///
    /// The engine rejects such schedules outright instead of letting the
    /// balance grow.
    #[error(
        "Payment {payment} does not cover interest {interest} accruing in period {period}"
    )]
    NegativeAmortization {
        /// The 1-based period in which the payment falls short.
        period: u32,
        /// The fixed periodic payment.
        payment: Decimal,
        /// The interest accrued in the period.
        interest: Decimal,
    },

    /// Core library error (date arithmetic).
    #[error("Core error: {0}")]
    Core(#[from] AmortError),
}

impl ScheduleError {
    /// Creates an invalid input error for a named field.
    #[must_use]
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

impl From<DayCountParseError> for ScheduleError {
    fn from(err: DayCountParseError) -> Self {
        Self::UnsupportedConvention { identifier: err.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_invalid_input_display() {
        let err = ScheduleError::invalid_input("principal", "must be positive");
        assert_eq!(
            err.to_string(),
            "Invalid input for 'principal': must be positive"
        );
    }

    #[test]
    fn test_unsupported_convention_from_parse_error() {
        let err: ScheduleError = "30Q/360".parse::<amort_core::DayCount>().unwrap_err().into();
        assert!(matches!(
            err,
            ScheduleError::UnsupportedConvention { ref identifier } if identifier == "30Q/360"
        ));
    }

    #[test]
    fn test_negative_amortization_display() {
        let err = ScheduleError::NegativeAmortization {
            period: 3,
            payment: dec!(10),
            interest: dec!(500),
        };
        assert!(err.to_string().contains("period 3"));
    }
}
