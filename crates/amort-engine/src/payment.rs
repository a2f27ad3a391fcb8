//! Level payment derivation and currency rounding.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

/// Rounds an amount to currency precision (2 decimal places, midpoint away
/// from zero).
#[must_use]
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Computes the level (annuity) payment that amortizes `principal` to zero
/// over `periods` payments at the given per-period rate.
///
/// The result is rounded to currency precision. A zero rate degenerates to
/// straight-line repayment, `principal / periods`, sidestepping the annuity
/// formula's division by zero.
///
/// # Panics
///
/// Panics if `periods` is zero; callers validate terms first.
#[must_use]
pub fn level_payment(principal: Decimal, periodic_rate: Decimal, periods: u32) -> Decimal {
    assert!(periods > 0, "level payment needs at least one period");

    if periodic_rate.is_zero() {
        return round_currency(principal / Decimal::from(periods));
    }

    let growth = (Decimal::ONE + periodic_rate).powi(i64::from(periods));
    round_currency(principal * periodic_rate * growth / (growth - Decimal::ONE))
}
