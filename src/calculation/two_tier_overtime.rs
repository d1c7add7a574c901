//! Two-tier overtime calculation.
//!
//! ## Rate Structure
//!
//! - Up to the second threshold: the standard weekly pay rule.
//! - Beyond the second threshold: each extra hour is paid at
//!   `base rate × second tier multiplier`.
//!
//! The second tier multiplier applies to the base rate directly. Unlike the
//! standard rule it is not reduced by one, because the hours beyond the second
//! threshold are not already counted at the base rate.

use rust_decimal::Decimal;
use serde::Serialize;

use super::weekly_pay::calculate_weekly_pay;
use crate::error::{EngineError, EngineResult};
use crate::models::RuleParameters;

/// Parameters of the second overtime tier.
///
/// # Example
///
/// ```
/// use weekly_pay_engine::calculation::TwoTierOvertime;
/// use rust_decimal::Decimal;
///
/// let tier = TwoTierOvertime::new(50, Decimal::from(2)).unwrap();
/// assert_eq!(tier.second_threshold_hours(), 50);
/// assert!(TwoTierOvertime::new(0, Decimal::from(2)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TwoTierOvertime {
    second_threshold_hours: i32,
    second_tier_multiplier: Decimal,
}

impl TwoTierOvertime {
    /// Creates the second tier, rejecting non-positive values.
    pub fn new(second_threshold_hours: i32, second_tier_multiplier: Decimal) -> EngineResult<Self> {
        if second_threshold_hours <= 0 {
            return Err(EngineError::InvalidRuleParameter {
                field: "second_threshold_hours".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if second_tier_multiplier <= Decimal::ZERO {
            return Err(EngineError::InvalidRuleParameter {
                field: "second_tier_multiplier".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            second_threshold_hours,
            second_tier_multiplier,
        })
    }

    /// Hours beyond this are paid at the second tier rate.
    pub fn second_threshold_hours(&self) -> i32 {
        self.second_threshold_hours
    }

    /// Factor applied to the base rate for hours beyond the second threshold.
    pub fn second_tier_multiplier(&self) -> Decimal {
        self.second_tier_multiplier
    }
}

/// Calculates weekly pay with a second overtime tier.
///
/// # Examples
///
/// ```
/// use weekly_pay_engine::calculation::{TwoTierOvertime, calculate_two_tier_pay};
/// use weekly_pay_engine::models::RuleParameters;
/// use rust_decimal::Decimal;
///
/// let params = RuleParameters::default();
/// let tier = TwoTierOvertime::new(50, Decimal::from(2)).unwrap();
///
/// // Below the second threshold the standard rule applies: 10 × 40 + 10 × 1.5 × 5
/// assert_eq!(calculate_two_tier_pay(Decimal::from(10), 45, &params, &tier), Decimal::from(475));
///
/// // 550 for the first 50 hours, then 5 hours × 10 × 2
/// assert_eq!(calculate_two_tier_pay(Decimal::from(10), 55, &params, &tier), Decimal::from(650));
/// ```
pub fn calculate_two_tier_pay(
    base_pay: Decimal,
    hours: i32,
    params: &RuleParameters,
    tier: &TwoTierOvertime,
) -> Decimal {
    let second_threshold = tier.second_threshold_hours();
    if hours <= second_threshold {
        return calculate_weekly_pay(base_pay, hours, params);
    }

    let first_tier_pay = calculate_weekly_pay(base_pay, second_threshold, params);
    let excess_hours = Decimal::from(hours - second_threshold);
    let second_tier_pay = base_pay
        .saturating_mul(tier.second_tier_multiplier())
        .saturating_mul(excess_hours);

    first_tier_pay.saturating_add(second_tier_pay)
}
