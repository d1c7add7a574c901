//! Calculation logic for the Weekly Pay Engine.
//!
//! This module contains input validation, the standard weekly pay rule, the
//! two-tier overtime rule, and the [`PayRuleEngine`] that composes them.

mod engine;
mod input_validation;
mod two_tier_overtime;
mod weekly_pay;

pub use engine::{PayRuleEngine, PayStrategy};
pub use input_validation::validate_inputs;
pub use two_tier_overtime::{TwoTierOvertime, calculate_two_tier_pay};
pub use weekly_pay::calculate_weekly_pay;
