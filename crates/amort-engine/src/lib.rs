//! # Amort Engine
//!
//! The loan amortization schedule engine.
//!
//! Given a loan's terms - principal, nominal annual rate, term, start date,
//! payment cadence, an optional fixed installment and an optional
//! interest-only window - plus a day count convention, the engine produces
//! the full payment schedule through to repayment: one row per period with
//! the opening balance, the interest accrued under the convention, the
//! principal portion and the cash payment.
//!
//! The computation is a pure function over its inputs: no I/O, no shared
//! state, and identical input always yields identical output.
//!
//! ## Example
//!
//! ```rust
//! use amort_core::{Date, DayCount};
//! use amort_engine::{compute_schedule, LoanTerms};
//! use rust_decimal_macros::dec;
//!
//! let terms = LoanTerms::new(
//!     dec!(120000),
//!     dec!(0.06),
//!     12,
//!     Date::parse("2024-01-01").unwrap(),
//! )
//! .with_day_count(DayCount::Act365Fixed);
//!
//! let schedule = compute_schedule(&terms).unwrap();
//! assert_eq!(schedule.len(), 12);
//! assert_eq!(schedule.total_principal(), dec!(120000));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_lossless)]

pub mod error;
pub mod payment;
pub mod schedule;
pub mod terms;

#[cfg(test)]
mod validation_tests;

pub use error::{ScheduleError, ScheduleResult};
pub use payment::level_payment;
pub use schedule::{compute_schedule, AmortizationSchedule, ScheduleRow};
pub use terms::LoanTerms;
