//! Payment frequency type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment frequency for a loan schedule.
///
/// The wire contract carries the number of payments per year as an integer;
/// [`PaymentFrequency::from_annual_payments`] maps the supported counts onto
/// this closed set. Only cadences that divide the year into whole months are
/// representable, because period dates are generated by whole-month stepping
/// from the origination date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentFrequency {
    /// Annual payments (1 per year)
    Annual,
    /// Semi-annual payments (2 per year)
    SemiAnnual,
    /// Payments every four months (3 per year)
    EveryFourMonths,
    /// Quarterly payments (4 per year)
    Quarterly,
    /// Payments every two months (6 per year)
    BiMonthly,
    /// Monthly payments (12 per year) - the usual cadence for consumer loans
    #[default]
    Monthly,
}

impl PaymentFrequency {
    /// Maps a payments-per-year count onto a frequency.
    ///
    /// Returns `None` for counts that do not divide the year into whole
    /// months (e.g. 5 or 52).
    #[must_use]
    pub fn from_annual_payments(annual_payments: u32) -> Option<Self> {
        match annual_payments {
            1 => Some(PaymentFrequency::Annual),
            2 => Some(PaymentFrequency::SemiAnnual),
            3 => Some(PaymentFrequency::EveryFourMonths),
            4 => Some(PaymentFrequency::Quarterly),
            6 => Some(PaymentFrequency::BiMonthly),
            12 => Some(PaymentFrequency::Monthly),
            _ => None,
        }
    }

    /// Returns the number of payment periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            PaymentFrequency::Annual => 1,
            PaymentFrequency::SemiAnnual => 2,
            PaymentFrequency::EveryFourMonths => 3,
            PaymentFrequency::Quarterly => 4,
            PaymentFrequency::BiMonthly => 6,
            PaymentFrequency::Monthly => 12,
        }
    }

    /// Returns the number of months per payment period.
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        12 / self.periods_per_year()
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentFrequency::Annual => "Annual",
            PaymentFrequency::SemiAnnual => "Semi-Annual",
            PaymentFrequency::EveryFourMonths => "Every Four Months",
            PaymentFrequency::Quarterly => "Quarterly",
            PaymentFrequency::BiMonthly => "Bi-Monthly",
            PaymentFrequency::Monthly => "Monthly",
        };
        write!(f, "{name}")
    }
}
