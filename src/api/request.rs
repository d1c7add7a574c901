//! Request types for the Weekly Pay Engine API.
//!
//! This module defines the JSON request structure for the `/calculate` endpoint.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_RULE_SET;

/// Request body for the `/calculate` endpoint.
///
/// `base_pay` accepts either a JSON string (`"8.20"`) or a number. `hours` may
/// be zero or negative; such requests are answered with an `invalid_input`
/// status rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Name of the rule set to evaluate against.
    #[serde(default = "default_rule_set")]
    pub rule_set: String,
    /// The base hourly rate.
    pub base_pay: Decimal,
    /// Hours worked in the week.
    pub hours: i32,
}

fn default_rule_set() -> String {
    DEFAULT_RULE_SET.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_with_string_base_pay() {
        let json = r#"{ "rule_set": "ericsson", "base_pay": "8.20", "hours": 47 }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.rule_set, "ericsson");
        assert_eq!(request.base_pay, Decimal::from_str("8.20").unwrap());
        assert_eq!(request.hours, 47);
    }

    #[test]
    fn test_rule_set_defaults_when_omitted() {
        let json = r#"{ "base_pay": "10", "hours": 40 }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.rule_set, "default");
    }

    #[test]
    fn test_negative_hours_deserialize() {
        let json = r#"{ "base_pay": "8.2", "hours": -1 }"#;
        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.hours, -1);
    }

    #[test]
    fn test_missing_hours_is_rejected() {
        let json = r#"{ "base_pay": "8.2" }"#;
        let err = serde_json::from_str::<CalculationRequest>(json).unwrap_err();
        assert!(err.to_string().contains("missing field `hours`"));
    }
}
