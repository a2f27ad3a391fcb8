//! Request handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use amort_core::{Date, DayCount, PaymentFrequency};
use amort_engine::{compute_schedule, LoanTerms, ScheduleError, ScheduleRow};

use crate::de;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Loan terms as they arrive on the wire.
///
/// Numeric fields accept JSON numbers or numeric strings - the consuming
/// form posts its input state verbatim. `payment_amount` of zero (the
/// form's resting value) means "derive the level payment".
#[derive(Debug, Deserialize)]
pub struct LoanRequest {
    /// Amount financed.
    #[serde(deserialize_with = "de::decimal")]
    pub principal: Decimal,
    /// Nominal annual rate as a fraction.
    #[serde(deserialize_with = "de::decimal")]
    pub rate: Decimal,
    /// Number of payment periods.
    #[serde(deserialize_with = "de::uint")]
    pub term: u32,
    /// Origination date (YYYY-MM-DD).
    pub start_date: String,
    /// Fixed installment; zero or absent derives the level payment.
    #[serde(default, deserialize_with = "de::decimal_opt")]
    pub payment_amount: Option<Decimal>,
    /// Payments per year.
    #[serde(default = "default_annual_payments", deserialize_with = "de::uint")]
    pub annual_payments: u32,
    /// Leading interest-only periods.
    #[serde(default, deserialize_with = "de::uint")]
    pub interest_only_period: u32,
    /// Day count convention identifier (e.g. "30A/360", "A/365F").
    pub compounding_method: String,
}

fn default_annual_payments() -> u32 {
    12
}

impl LoanRequest {
    /// Converts the wire record into validated-shape loan terms.
    fn into_terms(self) -> Result<LoanTerms, ScheduleError> {
        let start_date = Date::parse(&self.start_date)
            .map_err(|err| ScheduleError::invalid_input("start_date", err.to_string()))?;

        let frequency = PaymentFrequency::from_annual_payments(self.annual_payments)
            .ok_or_else(|| {
                ScheduleError::invalid_input(
                    "annual_payments",
                    "must divide the year into whole months (1, 2, 3, 4, 6 or 12)",
                )
            })?;

        let day_count: DayCount = self.compounding_method.parse()?;

        let mut terms = LoanTerms::new(self.principal, self.rate, self.term, start_date)
            .with_frequency(frequency)
            .with_interest_only_period(self.interest_only_period)
            .with_day_count(day_count);
        if let Some(payment) = self.payment_amount {
            terms = terms.with_payment_amount(payment);
        }
        Ok(terms)
    }
}

/// A schedule row as it leaves on the wire.
///
/// The date is an ISO-8601 timestamp at midnight - the shape the consuming
/// UI's date formatter matches on.
#[derive(Serialize)]
pub struct ScheduleRowDto {
    /// Payment due date as `YYYY-MM-DDTHH:MM:SS`.
    pub date: String,
    /// Principal outstanding before this payment.
    pub loan_balance_amount: Decimal,
    /// Interest accrued over the period.
    pub interest_amount: Decimal,
    /// Portion of the payment applied to principal.
    pub principal_amount: Decimal,
    /// Total cash payment.
    pub payment_amount: Decimal,
}

impl From<ScheduleRow> for ScheduleRowDto {
    fn from(row: ScheduleRow) -> Self {
        Self {
            date: format!("{}T00:00:00", row.date),
            loan_balance_amount: row.loan_balance_amount,
            interest_amount: row.interest_amount,
            principal_amount: row.principal_amount,
            payment_amount: row.payment_amount,
        }
    }
}

/// Response envelope for a computed schedule.
#[derive(Serialize)]
pub struct ScheduleResponse {
    /// The schedule rows in period order.
    pub schedule: Vec<ScheduleRowDto>,
}

/// Structured error body.
#[derive(Serialize)]
pub struct ErrorBody {
    /// The error detail.
    pub error: ErrorDetail,
}

/// Error detail naming the failing kind and field.
#[derive(Serialize)]
pub struct ErrorDetail {
    /// Error kind: `invalid_input`, `unsupported_convention` or
    /// `negative_amortization`.
    pub kind: &'static str,
    /// The offending request field, when one can be named.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
    /// Human-readable description.
    pub message: String,
}

fn error_response(err: &ScheduleError) -> (StatusCode, Json<ErrorBody>) {
    let (kind, field) = match err {
        ScheduleError::InvalidInput { field, .. } => ("invalid_input", Some(*field)),
        ScheduleError::UnsupportedConvention { .. } => {
            ("unsupported_convention", Some("compounding_method"))
        }
        ScheduleError::NegativeAmortization { .. } => {
            ("negative_amortization", Some("payment_amount"))
        }
        ScheduleError::Core(_) => ("invalid_input", None),
    };

    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: ErrorDetail {
                kind,
                field,
                message: err.to_string(),
            },
        }),
    )
}

/// Compute an amortization schedule from posted loan terms.
pub async fn calculate_loan(Json(request): Json<LoanRequest>) -> Response {
    let terms = match request.into_terms() {
        Ok(terms) => terms,
        Err(err) => return error_response(&err).into_response(),
    };

    match compute_schedule(&terms) {
        Ok(schedule) => {
            let rows: Vec<ScheduleRowDto> = schedule.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(ScheduleResponse { schedule: rows })).into_response()
        }
        Err(err) => error_response(&err).into_response(),
    }
}
