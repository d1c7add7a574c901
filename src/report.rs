//! Console table formatting for pay calculations.
//!
//! Presentation only: every row is evaluated through
//! [`PayRuleEngine::evaluate`] and the status is printed by name.

use rust_decimal::Decimal;

use crate::calculation::PayRuleEngine;
use crate::models::CalculationResult;

/// Returns the column titles of the pay table.
pub fn format_header() -> String {
    format!(
        "{:>10} {:>15} {:>15} {:>15} {:>25}",
        "Employee", "Base Pay", "Hours Worked", "Total To Pay", "Error Info"
    )
}

/// Formats one calculation as a table row.
///
/// # Example
///
/// ```
/// use weekly_pay_engine::calculation::PayRuleEngine;
/// use weekly_pay_engine::report::format_row;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let base_pay = Decimal::from_str("8.2").unwrap();
/// let result = PayRuleEngine::default().evaluate(base_pay, 47);
/// let row = format_row(2, base_pay, 47, &result);
///
/// assert!(row.contains("8.20"));
/// assert!(row.contains("414.10"));
/// assert!(row.ends_with("accepted"));
/// ```
pub fn format_row(order: usize, base_pay: Decimal, hours: i32, result: &CalculationResult) -> String {
    format!(
        "{:>10} {:>15} {:>15} {:>15} {:>25}",
        order,
        money(base_pay),
        hours,
        money(result.total_pay()),
        result.status().as_str()
    )
}

/// Evaluates each `(base_pay, hours)` pair and renders a numbered table.
pub fn render_table(engine: &PayRuleEngine, inputs: &[(Decimal, i32)]) -> String {
    let mut lines = Vec::with_capacity(inputs.len() + 1);
    lines.push(format_header());

    for (index, &(base_pay, hours)) in inputs.iter().enumerate() {
        let result = engine.evaluate(base_pay, hours);
        lines.push(format_row(index + 1, base_pay, hours, &result));
    }

    lines.join("\n")
}

fn money(amount: Decimal) -> String {
    format!("{:.2}", amount)
}
