//! Input validation against a rule set's limits.
//!
//! Validation never fails: every base rate and hours pair maps to exactly one
//! [`CalculationStatus`].

use rust_decimal::Decimal;

use crate::models::{CalculationStatus, RuleParameters};

/// Checks a base hourly rate and hours worked against the configured limits.
///
/// Checks run in a fixed order and the first match wins:
/// 1. Non-positive base rate or hours → [`CalculationStatus::InvalidInput`]
/// 2. Base rate below the minimum → [`CalculationStatus::TooLowBaseSalary`]
/// 3. Hours above the weekly maximum → [`CalculationStatus::TooManyHours`]
/// 4. Otherwise → [`CalculationStatus::Accepted`]
///
/// When the rate is too low and the hours are too many at the same time, only
/// `TooLowBaseSalary` is reported.
///
/// # Examples
///
/// ```
/// use weekly_pay_engine::calculation::validate_inputs;
/// use weekly_pay_engine::models::{CalculationStatus, RuleParameters};
/// use rust_decimal::Decimal;
///
/// let params = RuleParameters::default();
///
/// assert_eq!(validate_inputs(Decimal::new(82, 1), 47, &params), CalculationStatus::Accepted);
/// assert_eq!(validate_inputs(Decimal::new(75, 1), 70, &params), CalculationStatus::TooLowBaseSalary);
/// assert_eq!(validate_inputs(Decimal::ZERO, 15, &params), CalculationStatus::InvalidInput);
/// ```
pub fn validate_inputs(base_pay: Decimal, hours: i32, params: &RuleParameters) -> CalculationStatus {
    if base_pay <= Decimal::ZERO || hours <= 0 {
        return CalculationStatus::InvalidInput;
    }

    if base_pay < params.min_hourly_rate() {
        CalculationStatus::TooLowBaseSalary
    } else if hours > params.max_weekly_hours() {
        CalculationStatus::TooManyHours
    } else {
        CalculationStatus::Accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_zero_base_pay_is_invalid() {
        let params = RuleParameters::default();
        assert_eq!(
            validate_inputs(Decimal::ZERO, 15, &params),
            CalculationStatus::InvalidInput
        );
    }

    #[test]
    fn test_negative_base_pay_is_invalid() {
        let params = RuleParameters::default();
        assert_eq!(
            validate_inputs(dec("-1"), 15, &params),
            CalculationStatus::InvalidInput
        );
    }

    #[test]
    fn test_zero_and_negative_hours_are_invalid() {
        let params = RuleParameters::default();
        assert_eq!(
            validate_inputs(dec("8.2"), 0, &params),
            CalculationStatus::InvalidInput
        );
        assert_eq!(
            validate_inputs(dec("8.2"), -1, &params),
            CalculationStatus::InvalidInput
        );
        assert_eq!(
            validate_inputs(dec("8.2"), i32::MIN, &params),
            CalculationStatus::InvalidInput
        );
    }

    #[test]
    fn test_invalid_input_wins_over_every_other_check() {
        let params = RuleParameters::default();
        // Below minimum rate, but hours are negative.
        assert_eq!(
            validate_inputs(dec("2.0"), -5, &params),
            CalculationStatus::InvalidInput
        );
        // Negative rate with too many hours.
        assert_eq!(
            validate_inputs(dec("-8.0"), 90, &params),
            CalculationStatus::InvalidInput
        );
    }

    #[test]
    fn test_low_rate_is_flagged() {
        let params = RuleParameters::default();
        assert_eq!(
            validate_inputs(dec("7.5"), 35, &params),
            CalculationStatus::TooLowBaseSalary
        );
    }

    #[test]
    fn test_rate_at_minimum_is_accepted() {
        let params = RuleParameters::default();
        assert_eq!(
            validate_inputs(dec("8.00"), 35, &params),
            CalculationStatus::Accepted
        );
    }

    #[test]
    fn test_too_many_hours_is_flagged() {
        let params = RuleParameters::default();
        assert_eq!(
            validate_inputs(dec("10.0"), 73, &params),
            CalculationStatus::TooManyHours
        );
    }

    #[test]
    fn test_hours_at_maximum_are_accepted() {
        let params = RuleParameters::default();
        assert_eq!(
            validate_inputs(dec("10.0"), 60, &params),
            CalculationStatus::Accepted
        );
    }

    #[test]
    fn test_low_rate_wins_over_too_many_hours() {
        let params = RuleParameters::default();
        assert_eq!(
            validate_inputs(dec("7.5"), 70, &params),
            CalculationStatus::TooLowBaseSalary
        );
    }

    #[test]
    fn test_custom_limits_are_used() {
        let params = RuleParameters::new(dec("12.0"), 38, dec("1.5"), 45).unwrap();
        assert_eq!(
            validate_inputs(dec("10.0"), 20, &params),
            CalculationStatus::TooLowBaseSalary
        );
        assert_eq!(
            validate_inputs(dec("12.0"), 46, &params),
            CalculationStatus::TooManyHours
        );
        assert_eq!(
            validate_inputs(dec("12.0"), 45, &params),
            CalculationStatus::Accepted
        );
    }
}
