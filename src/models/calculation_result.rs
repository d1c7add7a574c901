//! Calculation result models for the Weekly Pay Engine.
//!
//! This module contains the [`CalculationStatus`] code and the
//! [`CalculationResult`] value returned by every evaluation.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

/// Outcome of checking a base rate and hours pair against a rule set.
///
/// Only [`CalculationStatus::InvalidInput`] suppresses the computed pay; the
/// other non-accepted statuses are advisory.
///
/// # Example
///
/// ```
/// use weekly_pay_engine::models::CalculationStatus;
///
/// assert_eq!(CalculationStatus::TooManyHours.to_string(), "too_many_hours");
/// assert!(CalculationStatus::TooManyHours.carries_pay());
/// assert!(!CalculationStatus::InvalidInput.carries_pay());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationStatus {
    /// Inputs are within every configured limit.
    Accepted,
    /// Hours worked exceed the weekly maximum. Pay is still computed.
    TooManyHours,
    /// Base rate is below the minimum hourly rate. Pay is still computed.
    TooLowBaseSalary,
    /// Base rate or hours is zero or negative. Pay is always zero.
    InvalidInput,
}

impl CalculationStatus {
    /// Returns the snake_case name used in JSON and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationStatus::Accepted => "accepted",
            CalculationStatus::TooManyHours => "too_many_hours",
            CalculationStatus::TooLowBaseSalary => "too_low_base_salary",
            CalculationStatus::InvalidInput => "invalid_input",
        }
    }

    /// Returns true when a result with this status reports a computed pay figure.
    pub fn carries_pay(&self) -> bool {
        !matches!(self, CalculationStatus::InvalidInput)
    }
}

impl fmt::Display for CalculationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The status and total pay produced by a single evaluation.
///
/// Results are only created by the engine; callers read them through
/// accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalculationResult {
    status: CalculationStatus,
    total_pay: Decimal,
}

impl CalculationResult {
    /// Builds a result, forcing the pay to zero for invalid input.
    pub(crate) fn new(status: CalculationStatus, total_pay: Decimal) -> Self {
        let total_pay = if status.carries_pay() {
            total_pay
        } else {
            Decimal::ZERO
        };
        Self { status, total_pay }
    }

    /// The status of the calculation.
    pub fn status(&self) -> CalculationStatus {
        self.status
    }

    /// The total pay for the week.
    pub fn total_pay(&self) -> Decimal {
        self.total_pay
    }

    /// Returns true when the inputs were within every configured limit.
    pub fn is_accepted(&self) -> bool {
        self.status == CalculationStatus::Accepted
    }
}
