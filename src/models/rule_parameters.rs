//! Tunable rule parameters for a single rule set.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{EngineError, EngineResult};

/// Default minimum hourly rate.
pub const DEFAULT_MIN_HOURLY_RATE: Decimal = Decimal::from_parts(80, 0, 0, false, 1);

/// Default number of hours paid at the regular rate before overtime applies.
pub const DEFAULT_OVERTIME_THRESHOLD_HOURS: i32 = 40;

/// Default overtime multiplier (150%).
pub const DEFAULT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Default maximum hours allowed in a week.
pub const DEFAULT_MAX_WEEKLY_HOURS: i32 = 60;

/// The four numeric parameters that make up an employer's pay policy.
///
/// Values are checked once by [`RuleParameters::new`] and cannot be changed
/// afterwards.
///
/// # Example
///
/// ```
/// use weekly_pay_engine::models::RuleParameters;
/// use rust_decimal::Decimal;
///
/// let params = RuleParameters::new(Decimal::new(90, 1), 38, Decimal::new(2, 0), 50).unwrap();
/// assert_eq!(params.overtime_threshold_hours(), 38);
///
/// let defaults = RuleParameters::default();
/// assert_eq!(defaults.max_weekly_hours(), 60);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleParameters {
    min_hourly_rate: Decimal,
    overtime_threshold_hours: i32,
    overtime_multiplier: Decimal,
    max_weekly_hours: i32,
}

impl RuleParameters {
    /// Creates a parameter set, rejecting non-positive values.
    pub fn new(
        min_hourly_rate: Decimal,
        overtime_threshold_hours: i32,
        overtime_multiplier: Decimal,
        max_weekly_hours: i32,
    ) -> EngineResult<Self> {
        if min_hourly_rate <= Decimal::ZERO {
            return Err(invalid("min_hourly_rate", "must be greater than zero"));
        }
        if overtime_threshold_hours <= 0 {
            return Err(invalid(
                "overtime_threshold_hours",
                "must be greater than zero",
            ));
        }
        if overtime_multiplier <= Decimal::ZERO {
            return Err(invalid("overtime_multiplier", "must be greater than zero"));
        }
        if max_weekly_hours <= 0 {
            return Err(invalid("max_weekly_hours", "must be greater than zero"));
        }

        Ok(Self {
            min_hourly_rate,
            overtime_threshold_hours,
            overtime_multiplier,
            max_weekly_hours,
        })
    }

    /// Hourly rates below this are flagged as too low.
    pub fn min_hourly_rate(&self) -> Decimal {
        self.min_hourly_rate
    }

    /// Hours beyond this are paid at the overtime rate.
    pub fn overtime_threshold_hours(&self) -> i32 {
        self.overtime_threshold_hours
    }

    /// Factor applied to the base rate for overtime hours.
    pub fn overtime_multiplier(&self) -> Decimal {
        self.overtime_multiplier
    }

    /// Weekly hours beyond this are flagged as too many.
    pub fn max_weekly_hours(&self) -> i32 {
        self.max_weekly_hours
    }
}

impl Default for RuleParameters {
    fn default() -> Self {
        Self {
            min_hourly_rate: DEFAULT_MIN_HOURLY_RATE,
            overtime_threshold_hours: DEFAULT_OVERTIME_THRESHOLD_HOURS,
            overtime_multiplier: DEFAULT_OVERTIME_MULTIPLIER,
            max_weekly_hours: DEFAULT_MAX_WEEKLY_HOURS,
        }
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidRuleParameter {
        field: field.to_string(),
        message: message.to_string(),
    }
}
