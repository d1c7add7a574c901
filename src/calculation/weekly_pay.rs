//! Standard weekly pay calculation.
//!
//! Regular hours are paid at the base rate. Hours beyond the overtime
//! threshold are paid at `base rate × overtime multiplier`.

use rust_decimal::Decimal;

use crate::models::RuleParameters;

/// Calculates weekly pay using the standard single-tier overtime rule.
///
/// Hours up to the overtime threshold are paid at the base rate and hours
/// beyond it at `base × multiplier`. This equals the whole week at the base
/// rate plus a premium of `(hours - threshold) × base × (multiplier - 1)`.
///
/// Hours are not clamped to the weekly maximum, and non-positive inputs are
/// not rejected here; see [`validate_inputs`](super::validate_inputs).
/// Results that would overflow `Decimal` saturate at `Decimal::MAX`.
///
/// # Examples
///
/// ```
/// use weekly_pay_engine::calculation::calculate_weekly_pay;
/// use weekly_pay_engine::models::RuleParameters;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let params = RuleParameters::default();
///
/// // Exactly at the threshold: no overtime.
/// let pay = calculate_weekly_pay(Decimal::from_str("8.2").unwrap(), 40, &params);
/// assert_eq!(pay, Decimal::from_str("328.0").unwrap());
///
/// // 33 hours of overtime at 150%.
/// let pay = calculate_weekly_pay(Decimal::from(10), 73, &params);
/// assert_eq!(pay, Decimal::from(895));
/// ```
pub fn calculate_weekly_pay(base_pay: Decimal, hours: i32, params: &RuleParameters) -> Decimal {
    let threshold = params.overtime_threshold_hours();
    let regular_pay = base_pay.saturating_mul(Decimal::from(hours.min(threshold)));

    if hours <= threshold {
        return regular_pay;
    }

    // Both parts are non-negative for positive inputs, so saturation keeps
    // the total non-decreasing in hours.
    let overtime_hours = Decimal::from(hours - threshold);
    let overtime_pay = base_pay
        .saturating_mul(params.overtime_multiplier())
        .saturating_mul(overtime_hours);

    regular_pay.saturating_add(overtime_pay)
}
