//! 30/360 day count family.
//!
//! All four variants share the same formula and differ only in how the day
//! components are adjusted before it is applied:
//!
//! Days = 360 x (Y2 - Y1) + 30 x (M2 - M1) + (D2 - D1)

use crate::types::Date;

/// Checks if a date is the last day of February.
///
/// This drives the 30U/360 end-of-month rules.
#[inline]
fn is_last_day_of_february(date: Date) -> bool {
    date.month() == 2 && date.is_end_of_month()
}

/// Applies the shared 30/360 formula to adjusted date components.
fn formula(start: Date, end: Date, d1: i64, d2: i64) -> i64 {
    let years = i64::from(end.year()) - i64::from(start.year());
    let months = i64::from(end.month()) - i64::from(start.month());
    360 * years + 30 * months + (d2 - d1)
}

/// 30A/360 (bond basis) day count.
///
/// Rules (ISDA 2006 4.16(f)):
/// 1. If D1 is 31, change D1 to 30
/// 2. If D2 is 31 and D1 is 30, change D2 to 30
pub(super) fn bond_basis_days(start: Date, end: Date) -> i64 {
    let mut d1 = i64::from(start.day());
    let mut d2 = i64::from(end.day());

    if d1 == 31 {
        d1 = 30;
    }
    if d2 == 31 && d1 == 30 {
        d2 = 30;
    }

    formula(start, end, d1, d2)
}

/// 30U/360 day count with February end-of-month rules.
///
/// Rules:
/// 1. If D1 is the last day of February, change D1 to 30
/// 2. If D1 is 31, change D1 to 30
/// 3. If D2 is the last day of February and D1 was the last day of
///    February, change D2 to 30
/// 4. If D2 is 31 and D1 is now 30, change D2 to 30
pub(super) fn us_days(start: Date, end: Date) -> i64 {
    let mut d1 = i64::from(start.day());
    let mut d2 = i64::from(end.day());

    let d1_was_feb_eom = is_last_day_of_february(start);

    if d1_was_feb_eom || d1 == 31 {
        d1 = 30;
    }

    if is_last_day_of_february(end) && d1_was_feb_eom {
        d2 = 30;
    } else if d2 == 31 && d1 == 30 {
        d2 = 30;
    }

    formula(start, end, d1, d2)
}

/// 30E/360 (eurobond basis) day count.
///
/// Rules:
/// 1. If D1 is 31, change D1 to 30
/// 2. If D2 is 31, change D2 to 30
pub(super) fn eurobond_days(start: Date, end: Date) -> i64 {
    let mut d1 = i64::from(start.day());
    let mut d2 = i64::from(end.day());

    if d1 == 31 {
        d1 = 30;
    }
    if d2 == 31 {
        d2 = 30;
    }

    formula(start, end, d1, d2)
}

/// 30E/360 ISDA day count.
///
/// Rules:
/// 1. If D1 is the last day of its month, change D1 to 30
/// 2. If D2 is the last day of its month, change D2 to 30
///
/// February month ends count as day 30 on both sides; the ISDA
/// termination-date exception is not modeled.
pub(super) fn eisda_days(start: Date, end: Date) -> i64 {
    let d1 = if start.is_end_of_month() {
        30
    } else {
        i64::from(start.day())
    };
    let d2 = if end.is_end_of_month() {
        30
    } else {
        i64::from(end.day())
    };

    formula(start, end, d1, d2)
}
