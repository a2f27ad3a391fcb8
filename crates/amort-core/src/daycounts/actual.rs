//! ACT day count family.
//!
//! The numerator is always actual elapsed calendar days; the variants
//! differ in the year basis. The simple quotients (`A/360`, `A/365F`) are
//! computed directly in the dispatching enum; this module holds the two
//! ACT/ACT variants, which need calendar awareness.

use rust_decimal::Decimal;

use crate::types::Date;

/// Actual/Actual ISDA year fraction.
///
/// The span is split at calendar-year boundaries; each year's portion is
/// divided by that year's actual length (365 or 366).
pub(super) fn act_act_isda_fraction(start: Date, end: Date) -> Decimal {
    if start >= end {
        return Decimal::ZERO;
    }

    let mut total = Decimal::ZERO;
    let mut current = start;

    while current.year() < end.year() {
        let next_jan_first = Date::from_ymd(current.year() + 1, 1, 1).unwrap();
        let days = current.days_between(&next_jan_first);
        total += Decimal::from(days) / Decimal::from(current.days_in_year());
        current = next_jan_first;
    }

    let days = current.days_between(&end);
    total + Decimal::from(days) / Decimal::from(current.days_in_year())
}

/// Actual/Actual AFB year fraction.
///
/// Whole years are counted backward from the period end; the remaining
/// stub is divided by 366 when it spans a February 29, by 365 otherwise.
pub(super) fn act_act_afb_fraction(start: Date, end: Date) -> Decimal {
    if start >= end {
        return Decimal::ZERO;
    }

    let mut whole_years = 0i32;
    let mut reduced_end = end;

    loop {
        let candidate = end.add_years(-(whole_years + 1)).unwrap();
        if candidate < start {
            break;
        }
        whole_years += 1;
        reduced_end = candidate;
    }

    let days = start.days_between(&reduced_end);
    let basis = if contains_feb_29(start, reduced_end) {
        366
    } else {
        365
    };

    Decimal::from(whole_years) + Decimal::from(days) / Decimal::from(basis)
}

/// Checks if the span (start, end] contains a February 29.
fn contains_feb_29(start: Date, end: Date) -> bool {
    if start >= end {
        return false;
    }

    for year in start.year()..=end.year() {
        if !is_leap_year(year) {
            continue;
        }
        let feb_29 = Date::from_ymd(year, 2, 29).unwrap();
        if feb_29 > start && feb_29 <= end {
            return true;
        }
    }

    false
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}
