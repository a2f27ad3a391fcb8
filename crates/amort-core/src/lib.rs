//! # Amort Core
//!
//! Core types and day count conventions for the Amort loan schedule engine.
//!
//! This crate provides the foundational building blocks used throughout Amort:
//!
//! - **Types**: Domain-specific types like [`Date`] and [`PaymentFrequency`]
//! - **Day Count Conventions**: The closed set of supported accrual
//!   conventions, from the 30/360 family through ACT/ACT AFB
//!
//! ## Design Philosophy
//!
//! - **Closed sets over strings**: conventions and payment cadences are
//!   enums, so an unsupported value is rejected at the boundary instead of
//!   leaking into the calculation
//! - **Decimal everywhere**: year fractions and amounts are `rust_decimal`
//!   values, never floats
//!
//! ## Example
//!
//! ```rust
//! use amort_core::{Date, DayCount};
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 2, 1).unwrap();
//!
//! let convention: DayCount = "A/365F".parse().unwrap();
//! let fraction = convention.year_fraction(start, end);
//! assert_eq!(convention.day_count(start, end), 31);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

pub mod daycounts;
pub mod error;
pub mod types;

pub use daycounts::{DayCount, DayCountParseError};
pub use error::{AmortError, AmortResult};
pub use types::{Date, PaymentFrequency};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{DayCount, DayCountParseError};
    pub use crate::error::{AmortError, AmortResult};
    pub use crate::types::{Date, PaymentFrequency};
}
