//! Schedule computation - the period iteration at the heart of the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use amort_core::Date;

use crate::error::{ScheduleError, ScheduleResult};
use crate::payment::{level_payment, round_currency};
use crate::terms::LoanTerms;

/// A single payment period in an amortization schedule.
///
/// The balance is the opening balance - principal outstanding immediately
/// before this period's payment is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Date the payment is due.
    pub date: Date,
    /// Principal outstanding before this payment.
    pub loan_balance_amount: Decimal,
    /// Interest accrued over the period.
    pub interest_amount: Decimal,
    /// Portion of the payment applied to principal.
    pub principal_amount: Decimal,
    /// Total cash payment (`interest_amount + principal_amount`).
    pub payment_amount: Decimal,
}

/// A complete amortization schedule, ordered by period.
///
/// Constructed only by [`compute_schedule`]; row order is significant and
/// preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    rows: Vec<ScheduleRow>,
}

impl AmortizationSchedule {
    /// Returns the schedule rows in period order.
    #[must_use]
    pub fn rows(&self) -> &[ScheduleRow] {
        &self.rows
    }

    /// Returns the number of periods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the schedule has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the final period, if any.
    #[must_use]
    pub fn final_row(&self) -> Option<&ScheduleRow> {
        self.rows.last()
    }

    /// Returns the total interest paid over the life of the loan.
    #[must_use]
    pub fn total_interest(&self) -> Decimal {
        self.rows.iter().map(|row| row.interest_amount).sum()
    }

    /// Returns the total principal repaid.
    ///
    /// For any schedule the engine produces this equals the amount
    /// financed.
    #[must_use]
    pub fn total_principal(&self) -> Decimal {
        self.rows.iter().map(|row| row.principal_amount).sum()
    }

    /// Returns an iterator over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, ScheduleRow> {
        self.rows.iter()
    }
}

impl IntoIterator for AmortizationSchedule {
    type Item = ScheduleRow;
    type IntoIter = std::vec::IntoIter<ScheduleRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a AmortizationSchedule {
    type Item = &'a ScheduleRow;
    type IntoIter = std::slice::Iter<'a, ScheduleRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Computes the full amortization schedule for the given loan terms.
///
/// Validation is fail-fast: any bad input is rejected before a single row
/// is produced, so the result is either a complete schedule or an error,
/// never a truncated one.
///
/// The fixed installment is the caller's `payment_amount` when it is set
/// and non-zero; otherwise the level payment is derived over the periods
/// that remain after the interest-only window. Every emitted amount is
/// rounded to currency precision, and the final period absorbs the
/// accumulated rounding drift so the balance lands on exactly zero.
///
/// # Errors
///
/// - `InvalidInput` when a term is out of range
/// - `NegativeAmortization` when the fixed payment cannot cover a period's
///   interest (the engine rejects rather than growing the balance)
pub fn compute_schedule(terms: &LoanTerms) -> ScheduleResult<AmortizationSchedule> {
    terms.validate()?;

    let months_per_period = terms.frequency.months_per_period() as i32;
    let fixed_payment = match terms.payment_amount {
        Some(payment) if !payment.is_zero() => payment,
        _ => level_payment(
            terms.principal,
            terms.periodic_rate(),
            terms.amortizing_periods(),
        ),
    };

    let mut rows = Vec::with_capacity(terms.term as usize);
    let mut balance = terms.principal;
    let mut period_start = terms.start_date;

    for period in 1..=terms.term {
        // Always advance from origination, so month-end clamping (Jan 31 ->
        // Feb 29 -> Mar 31) never compounds across periods.
        let period_end = terms.start_date.add_months(period as i32 * months_per_period)?;

        let fraction = terms.day_count.year_fraction(period_start, period_end);
        let interest = round_currency(balance * terms.annual_rate * fraction);

        let (principal, payment) = if period <= terms.interest_only_period {
            (Decimal::ZERO, interest)
        } else if period == terms.term {
            // Force the remaining balance through, absorbing rounding drift.
            (balance, interest + balance)
        } else {
            let principal = fixed_payment - interest;
            if principal < Decimal::ZERO {
                return Err(ScheduleError::NegativeAmortization {
                    period,
                    payment: fixed_payment,
                    interest,
                });
            }
            if principal > balance {
                (balance, interest + balance)
            } else {
                (principal, fixed_payment)
            }
        };

        rows.push(ScheduleRow {
            date: period_end,
            loan_balance_amount: balance,
            interest_amount: interest,
            principal_amount: principal,
            payment_amount: payment,
        });

        balance -= principal;
        period_start = period_end;
    }

    Ok(AmortizationSchedule { rows })
}
