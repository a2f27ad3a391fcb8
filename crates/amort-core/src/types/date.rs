//! Date type for schedule calculations.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{AmortError, AmortResult};

/// A calendar date for schedule calculations.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing the
/// calendar operations the schedule engine needs and ensuring type safety.
///
/// # Example
///
/// ```rust
/// use amort_core::Date;
///
/// let date = Date::from_ymd(2024, 1, 31).unwrap();
/// let next = date.add_months(1).unwrap();
/// assert_eq!(next.month(), 2);
/// assert_eq!(next.day(), 29); // clamped to the end of February
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `AmortError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> AmortResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| AmortError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `AmortError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> AmortResult<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| AmortError::invalid_date(format!("cannot parse '{s}'")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Returns the number of days in the date's year.
    #[must_use]
    pub fn days_in_year(&self) -> u32 {
        if self.is_leap_year() {
            366
        } else {
            365
        }
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of months to the date.
    ///
    /// If the resulting day would be invalid (e.g., Jan 31 + 1 month),
    /// it rolls back to the last valid day of the month.
    ///
    /// # Errors
    ///
    /// Returns `AmortError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> AmortResult<Self> {
        let total_months = self.year() * 12 + self.month() as i32 - 1 + months;
        let new_year = total_months.div_euclid(12);
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        // Clamp day to valid range for new month
        let max_day = days_in_month(new_year, new_month);
        let new_day = self.day().min(max_day);

        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Adds a number of years to the date.
    ///
    /// Feb 29 rolls back to Feb 28 when the target year is not a leap year.
    ///
    /// # Errors
    ///
    /// Returns `AmortError::InvalidDate` if the result is invalid.
    pub fn add_years(&self, years: i32) -> AmortResult<Self> {
        let new_year = self.year() + years;
        let max_day = days_in_month(new_year, self.month());
        let new_day = self.day().min(max_day);

        Self::from_ymd(new_year, self.month(), new_day)
    }

    /// Calculates the number of calendar days between two dates.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the end of month for the current date.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        Date(
            NaiveDate::from_ymd_opt(self.year(), self.month(), self.days_in_month())
                .expect("end of month should always be valid"),
        )
    }

    /// Checks if the date is the end of month.
    #[must_use]
    pub fn is_end_of_month(&self) -> bool {
        self.day() == self.days_in_month()
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

/// Helper function to get days in a month for a given year.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => panic!("Invalid month: {month}"),
    }
}

/// Helper function to check if a year is a leap year.
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2024, 6, 15).unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2024-01-01").unwrap();
        assert_eq!(date.year(), 2024);
        assert_eq!(date.month(), 1);
        assert_eq!(date.day(), 1);

        assert!(Date::parse("01/01/2024").is_err());
        assert!(Date::parse("").is_err());
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        let date = Date::from_ymd(2025, 1, 31).unwrap();
        let result = date.add_months(1).unwrap();
        assert_eq!(result.month(), 2);
        assert_eq!(result.day(), 28);

        // Leap year February keeps the 29th
        let date = Date::from_ymd(2024, 1, 31).unwrap();
        let result = date.add_months(1).unwrap();
        assert_eq!(result.day(), 29);
    }

    #[test]
    fn test_add_months_across_year() {
        let date = Date::from_ymd(2024, 11, 15).unwrap();
        let result = date.add_months(3).unwrap();
        assert_eq!(result.year(), 2025);
        assert_eq!(result.month(), 2);
        assert_eq!(result.day(), 15);
    }

    #[test]
    fn test_add_months_negative() {
        let date = Date::from_ymd(2024, 1, 15).unwrap();
        let result = date.add_months(-2).unwrap();
        assert_eq!(result.year(), 2023);
        assert_eq!(result.month(), 11);
    }

    #[test]
    fn test_add_years_leap_day() {
        let date = Date::from_ymd(2024, 2, 29).unwrap();
        let result = date.add_years(1).unwrap();
        assert_eq!(result.month(), 2);
        assert_eq!(result.day(), 28);

        let back = date.add_years(-4).unwrap();
        assert_eq!(back.day(), 29);
    }

    #[test]
    fn test_leap_year() {
        assert!(Date::from_ymd(2024, 1, 1).unwrap().is_leap_year());
        assert!(!Date::from_ymd(2025, 1, 1).unwrap().is_leap_year());
        assert!(!Date::from_ymd(2100, 1, 1).unwrap().is_leap_year());
        assert!(Date::from_ymd(2000, 1, 1).unwrap().is_leap_year());
    }

    #[test]
    fn test_days_between() {
        let d1 = Date::from_ymd(2024, 1, 1).unwrap();
        let d2 = Date::from_ymd(2024, 2, 1).unwrap();
        assert_eq!(d1.days_between(&d2), 31);
        assert_eq!(d2.days_between(&d1), -31);
    }

    #[test]
    fn test_end_of_month() {
        let date = Date::from_ymd(2024, 2, 10).unwrap();
        assert_eq!(date.end_of_month(), Date::from_ymd(2024, 2, 29).unwrap());
        assert!(!date.is_end_of_month());
        assert!(date.end_of_month().is_end_of_month());
    }

    #[test]
    fn test_date_arithmetic_operators() {
        let d1 = Date::from_ymd(2024, 1, 1).unwrap();

        let d2 = d1 + 10;
        assert_eq!(d2.day(), 11);

        let d3 = d2 - 5;
        assert_eq!(d3.day(), 6);

        assert_eq!(d2 - d1, 10);
    }

    #[test]
    fn test_display() {
        let date = Date::from_ymd(2024, 6, 5).unwrap();
        assert_eq!(format!("{date}"), "2024-06-05");
    }

    #[test]
    fn test_serde() {
        let date = Date::from_ymd(2024, 6, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-06-15\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}
