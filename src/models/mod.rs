//! Core data models for the Weekly Pay Engine.
//!
//! This module contains the rule parameters and the calculation result types.

mod calculation_result;
mod rule_parameters;

pub use calculation_result::{CalculationResult, CalculationStatus};
pub use rule_parameters::{
    DEFAULT_MAX_WEEKLY_HOURS, DEFAULT_MIN_HOURLY_RATE, DEFAULT_OVERTIME_MULTIPLIER,
    DEFAULT_OVERTIME_THRESHOLD_HOURS, RuleParameters,
};
