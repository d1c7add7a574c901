//! The pay rule engine.
//!
//! A [`PayRuleEngine`] pairs one rule set's [`RuleParameters`] with the
//! [`PayStrategy`] used to turn hours into pay. Validation is shared by every
//! strategy; only the pay computation varies.

use rust_decimal::Decimal;
use serde::Serialize;

use super::input_validation::validate_inputs;
use super::two_tier_overtime::{TwoTierOvertime, calculate_two_tier_pay};
use super::weekly_pay::calculate_weekly_pay;
use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationResult, CalculationStatus, RuleParameters};

/// How a rule set turns a base rate and hours into weekly pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PayStrategy {
    /// Single overtime tier, see [`calculate_weekly_pay`].
    Standard,
    /// Standard rule up to a second threshold, then a second multiplier.
    TwoTier(TwoTierOvertime),
}

/// Evaluates weekly pay for one rule set.
///
/// Engines are immutable and hold no per-call state, so a single instance can
/// be shared freely between threads.
///
/// # Example
///
/// ```
/// use weekly_pay_engine::calculation::PayRuleEngine;
/// use weekly_pay_engine::models::{CalculationStatus, RuleParameters};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let engine = PayRuleEngine::new(RuleParameters::default());
///
/// let result = engine.evaluate(Decimal::from_str("7.5").unwrap(), 35);
/// assert_eq!(result.status(), CalculationStatus::TooLowBaseSalary);
/// assert_eq!(result.total_pay(), Decimal::from_str("262.5").unwrap());
///
/// let result = engine.evaluate(Decimal::ZERO, 15);
/// assert_eq!(result.status(), CalculationStatus::InvalidInput);
/// assert_eq!(result.total_pay(), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PayRuleEngine {
    parameters: RuleParameters,
    strategy: PayStrategy,
}

impl PayRuleEngine {
    /// Creates an engine using the standard overtime rule.
    pub fn new(parameters: RuleParameters) -> Self {
        Self {
            parameters,
            strategy: PayStrategy::Standard,
        }
    }

    /// Creates an engine with a second overtime tier.
    ///
    /// The second threshold must lie above the first overtime threshold.
    pub fn with_two_tier_overtime(
        parameters: RuleParameters,
        tier: TwoTierOvertime,
    ) -> EngineResult<Self> {
        if tier.second_threshold_hours() <= parameters.overtime_threshold_hours() {
            return Err(EngineError::InvalidRuleParameter {
                field: "second_threshold_hours".to_string(),
                message: format!(
                    "must be greater than the overtime threshold of {} hours",
                    parameters.overtime_threshold_hours()
                ),
            });
        }

        Ok(Self {
            parameters,
            strategy: PayStrategy::TwoTier(tier),
        })
    }

    /// The rule parameters of this engine.
    pub fn parameters(&self) -> &RuleParameters {
        &self.parameters
    }

    /// The pay computation strategy of this engine.
    pub fn strategy(&self) -> &PayStrategy {
        &self.strategy
    }

    /// Checks the inputs against this rule set's limits.
    pub fn validate(&self, base_pay: Decimal, hours: i32) -> CalculationStatus {
        validate_inputs(base_pay, hours, &self.parameters)
    }

    /// Computes pay with this rule set's strategy, without validating the inputs.
    pub fn compute_pay(&self, base_pay: Decimal, hours: i32) -> Decimal {
        match &self.strategy {
            PayStrategy::Standard => calculate_weekly_pay(base_pay, hours, &self.parameters),
            PayStrategy::TwoTier(tier) => {
                calculate_two_tier_pay(base_pay, hours, &self.parameters, tier)
            }
        }
    }

    /// Validates the inputs and computes the total pay.
    ///
    /// Invalid input yields a zero total; every other status carries the
    /// computed pay, even when the inputs were outside the configured limits.
    pub fn evaluate(&self, base_pay: Decimal, hours: i32) -> CalculationResult {
        let status = self.validate(base_pay, hours);

        let total_pay = if status.carries_pay() {
            self.compute_pay(base_pay, hours)
        } else {
            Decimal::ZERO
        };

        CalculationResult::new(status, total_pay)
    }
}

impl Default for PayRuleEngine {
    fn default() -> Self {
        Self::new(RuleParameters::default())
    }
}
