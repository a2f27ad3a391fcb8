//! Day count conventions for interest accrual.
//!
//! A day count convention turns the span between two calendar dates into a
//! fraction of a year, which is what interest accrual is quoted against.
//! The supported set is closed: every convention a caller can ask for is a
//! variant of [`DayCount`], and an unknown identifier is rejected when it is
//! parsed rather than somewhere inside a calculation.
//!
//! # Supported Conventions
//!
//! ## 30/360 Family (assumes 30-day months, 360-day years)
//!
//! - `30A/360`: Bond basis
//! - `30U/360`: US convention with February end-of-month rules
//! - `30E/360`: Eurobond convention
//! - `30E/360 ISDA`: month ends (February included) count as day 30
//!
//! ## ACT Family (actual elapsed days in the numerator)
//!
//! - `A/360`: actual days over a 360-day year
//! - `A/365F`: actual days over a fixed 365-day year
//! - `A/A ISDA`: per-calendar-year split over 365/366
//! - `A/A AFB`: whole years counted back from the period end
//!
//! # Usage
//!
//! ```rust
//! use amort_core::{Date, DayCount};
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 7, 1).unwrap();
//!
//! let days = DayCount::Thirty360Bond.day_count(start, end);
//! assert_eq!(days, 180);
//! let fraction = DayCount::Thirty360Bond.year_fraction(start, end);
//! ```

mod actual;
mod thirty360;

use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::Date;

/// The closed set of supported day count conventions.
///
/// Each variant carries a distinct rule for counting the days between two
/// dates and the year basis to divide them by. The canonical identifier
/// (returned by [`name`](Self::name), accepted by `FromStr` and used for
/// serde) is the form the wire contract uses, e.g. `"30E/360 ISDA"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayCount {
    /// 30/360 bond basis (`30A/360`).
    #[default]
    Thirty360Bond,

    /// 30/360 US (`30U/360`) with February end-of-month rules.
    Thirty360US,

    /// 30E/360 eurobond basis (`30E/360`).
    Thirty360E,

    /// 30E/360 ISDA (`30E/360 ISDA`): any month end counts as day 30.
    Thirty360EIsda,

    /// Actual/360 (`A/360`).
    Act360,

    /// Actual/365 Fixed (`A/365F`).
    Act365Fixed,

    /// Actual/Actual ISDA (`A/A ISDA`): per-calendar-year split.
    ActActIsda,

    /// Actual/Actual AFB (`A/A AFB`): French convention.
    ActActAfb,
}

impl DayCount {
    /// Calculates the year fraction between two dates under this convention.
    ///
    /// The fraction can be negative when `end` precedes `start` for the
    /// simple-quotient conventions; the ACT/ACT variants return zero for
    /// inverted spans.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        match self {
            DayCount::Thirty360Bond
            | DayCount::Thirty360US
            | DayCount::Thirty360E
            | DayCount::Thirty360EIsda => {
                Decimal::from(self.day_count(start, end)) / Decimal::from(360)
            }
            DayCount::Act360 => Decimal::from(start.days_between(&end)) / Decimal::from(360),
            DayCount::Act365Fixed => Decimal::from(start.days_between(&end)) / Decimal::from(365),
            DayCount::ActActIsda => actual::act_act_isda_fraction(start, end),
            DayCount::ActActAfb => actual::act_act_afb_fraction(start, end),
        }
    }

    /// Calculates the day count between two dates under this convention.
    ///
    /// For the ACT family this is actual calendar days; for the 30/360
    /// family it applies the 30-day month adjustments.
    #[must_use]
    pub fn day_count(&self, start: Date, end: Date) -> i64 {
        match self {
            DayCount::Thirty360Bond => thirty360::bond_basis_days(start, end),
            DayCount::Thirty360US => thirty360::us_days(start, end),
            DayCount::Thirty360E => thirty360::eurobond_days(start, end),
            DayCount::Thirty360EIsda => thirty360::eisda_days(start, end),
            DayCount::Act360
            | DayCount::Act365Fixed
            | DayCount::ActActIsda
            | DayCount::ActActAfb => start.days_between(&end),
        }
    }

    /// Returns the canonical identifier of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DayCount::Thirty360Bond => "30A/360",
            DayCount::Thirty360US => "30U/360",
            DayCount::Thirty360E => "30E/360",
            DayCount::Thirty360EIsda => "30E/360 ISDA",
            DayCount::Act360 => "A/360",
            DayCount::Act365Fixed => "A/365F",
            DayCount::ActActIsda => "A/A ISDA",
            DayCount::ActActAfb => "A/A AFB",
        }
    }

    /// Returns all supported conventions.
    #[must_use]
    pub fn all() -> &'static [DayCount] {
        &[
            DayCount::Thirty360Bond,
            DayCount::Thirty360US,
            DayCount::Thirty360E,
            DayCount::Thirty360EIsda,
            DayCount::Act360,
            DayCount::Act365Fixed,
            DayCount::ActActIsda,
            DayCount::ActActAfb,
        ]
    }
}

impl std::fmt::Display for DayCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for DayCount {
    type Err = DayCountParseError;

    /// Parses a day count convention from its identifier.
    ///
    /// Accepts the canonical identifiers (`30A/360`, `A/365F`, ...) plus
    /// common aliases (`ACT/360`, `30/360`, `A/A`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_uppercase();
        let normalized = normalized.trim();

        match normalized {
            "30A/360" | "30/360" | "30/360 BOND" | "BOND" => Ok(DayCount::Thirty360Bond),

            "30U/360" | "30US/360" | "30/360 US" => Ok(DayCount::Thirty360US),

            "30E/360" | "EUROBOND" => Ok(DayCount::Thirty360E),

            "30E/360 ISDA" | "30E/360ISDA" => Ok(DayCount::Thirty360EIsda),

            "A/360" | "ACT/360" | "ACTUAL/360" => Ok(DayCount::Act360),

            "A/365F" | "A/365" | "ACT/365" | "ACT/365F" | "ACTUAL/365 FIXED" => {
                Ok(DayCount::Act365Fixed)
            }

            "A/A ISDA" | "A/A" | "ACT/ACT" | "ACT/ACT ISDA" | "ACTUAL/ACTUAL" => {
                Ok(DayCount::ActActIsda)
            }

            "A/A AFB" | "ACT/ACT AFB" | "AFB" => Ok(DayCount::ActActAfb),

            _ => Err(DayCountParseError(s.to_string())),
        }
    }
}

/// Error type for parsing day count conventions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCountParseError(pub String);

impl std::fmt::Display for DayCountParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown day count convention: '{}'", self.0)
    }
}

impl std::error::Error for DayCountParseError {}

impl Serialize for DayCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for DayCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}
