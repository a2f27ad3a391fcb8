//! Loan terms - the engine's input record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use amort_core::{Date, DayCount, PaymentFrequency};

use crate::error::{ScheduleError, ScheduleResult};

/// The terms of a loan, as handed to the schedule engine.
///
/// Immutable once constructed; the builder-style `with_*` methods cover the
/// optional fields. Validation happens in [`validate`](Self::validate),
/// which the engine runs before computing anything.
///
/// # Example
///
/// ```rust
/// use amort_core::{Date, DayCount};
/// use amort_engine::LoanTerms;
/// use rust_decimal_macros::dec;
///
/// let terms = LoanTerms::new(dec!(250000), dec!(0.045), 360, Date::parse("2024-03-01").unwrap())
///     .with_interest_only_period(12)
///     .with_day_count(DayCount::Thirty360US);
///
/// assert!(terms.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount financed. Must be positive.
    pub principal: Decimal,
    /// Nominal annual interest rate as a fraction (0.075 = 7.5%). Must not
    /// be negative.
    pub annual_rate: Decimal,
    /// Total number of scheduled payment periods. Must be positive.
    pub term: u32,
    /// Origination date - the start of the first accrual period.
    pub start_date: Date,
    /// Caller-fixed installment. `None` or zero derives the level payment.
    pub payment_amount: Option<Decimal>,
    /// Payment cadence.
    pub frequency: PaymentFrequency,
    /// Number of leading periods during which only interest is paid.
    pub interest_only_period: u32,
    /// Day count convention governing interest accrual.
    pub day_count: DayCount,
}

impl LoanTerms {
    /// Creates loan terms with the required fields; optional fields take
    /// their defaults (monthly payments, no interest-only window, derived
    /// payment, 30A/360 accrual).
    #[must_use]
    pub fn new(principal: Decimal, annual_rate: Decimal, term: u32, start_date: Date) -> Self {
        Self {
            principal,
            annual_rate,
            term,
            start_date,
            payment_amount: None,
            frequency: PaymentFrequency::default(),
            interest_only_period: 0,
            day_count: DayCount::default(),
        }
    }

    /// Sets a caller-fixed installment amount.
    #[must_use]
    pub fn with_payment_amount(mut self, payment_amount: Decimal) -> Self {
        self.payment_amount = Some(payment_amount);
        self
    }

    /// Sets the payment cadence.
    #[must_use]
    pub fn with_frequency(mut self, frequency: PaymentFrequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the number of leading interest-only periods.
    #[must_use]
    pub fn with_interest_only_period(mut self, periods: u32) -> Self {
        self.interest_only_period = periods;
        self
    }

    /// Sets the day count convention.
    #[must_use]
    pub fn with_day_count(mut self, day_count: DayCount) -> Self {
        self.day_count = day_count;
        self
    }

    /// Validates the terms, naming the first offending field.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidInput` when a field is out of range.
    pub fn validate(&self) -> ScheduleResult<()> {
        if self.principal <= Decimal::ZERO {
            return Err(ScheduleError::invalid_input(
                "principal",
                "must be positive",
            ));
        }
        if self.annual_rate < Decimal::ZERO {
            return Err(ScheduleError::invalid_input(
                "rate",
                "must not be negative",
            ));
        }
        if self.term == 0 {
            return Err(ScheduleError::invalid_input("term", "must be positive"));
        }
        if let Some(payment) = self.payment_amount {
            if payment < Decimal::ZERO {
                return Err(ScheduleError::invalid_input(
                    "payment_amount",
                    "must not be negative",
                ));
            }
        }
        if self.interest_only_period >= self.term {
            return Err(ScheduleError::invalid_input(
                "interest_only_period",
                "must leave at least one amortizing period",
            ));
        }
        Ok(())
    }

    /// Returns the number of periods over which principal amortizes.
    #[must_use]
    pub fn amortizing_periods(&self) -> u32 {
        self.term - self.interest_only_period
    }

    /// Returns the nominal per-period rate (`annual_rate / periods per year`).
    #[must_use]
    pub fn periodic_rate(&self) -> Decimal {
        self.annual_rate / Decimal::from(self.frequency.periods_per_year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn terms() -> LoanTerms {
        LoanTerms::new(
            dec!(100000),
            dec!(0.05),
            24,
            Date::from_ymd(2024, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_valid_terms() {
        assert!(terms().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_principal() {
        let mut t = terms();
        t.principal = Decimal::ZERO;
        assert!(matches!(
            t.validate(),
            Err(ScheduleError::InvalidInput { field: "principal", .. })
        ));

        t.principal = dec!(-1);
        assert!(t.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_rate() {
        let mut t = terms();
        t.annual_rate = dec!(-0.01);
        assert!(matches!(
            t.validate(),
            Err(ScheduleError::InvalidInput { field: "rate", .. })
        ));
    }

    #[test]
    fn test_zero_rate_is_valid() {
        let mut t = terms();
        t.annual_rate = Decimal::ZERO;
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_term() {
        let mut t = terms();
        t.term = 0;
        assert!(matches!(
            t.validate(),
            Err(ScheduleError::InvalidInput { field: "term", .. })
        ));
    }

    #[test]
    fn test_rejects_negative_payment() {
        let t = terms().with_payment_amount(dec!(-10));
        assert!(matches!(
            t.validate(),
            Err(ScheduleError::InvalidInput { field: "payment_amount", .. })
        ));
    }

    #[test]
    fn test_rejects_interest_only_covering_full_term() {
        let t = terms().with_interest_only_period(24);
        assert!(matches!(
            t.validate(),
            Err(ScheduleError::InvalidInput { field: "interest_only_period", .. })
        ));

        let t = terms().with_interest_only_period(23);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_periodic_rate() {
        let t = terms().with_frequency(PaymentFrequency::Quarterly);
        assert_eq!(t.periodic_rate(), dec!(0.0125));
    }

    #[test]
    fn test_amortizing_periods() {
        let t = terms().with_interest_only_period(6);
        assert_eq!(t.amortizing_periods(), 18);
    }
}
