//! Named rule-set registry.
//!
//! This module provides the [`RuleSetRegistry`] type, which maps rule-set
//! names to [`PayRuleEngine`] instances. A registry is built once at startup
//! and then shared read-only.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculation::{PayRuleEngine, TwoTierOvertime};
use crate::error::{EngineError, EngineResult};
use crate::models::RuleParameters;

/// Name of the rule set using the default parameters.
pub const DEFAULT_RULE_SET: &str = "default";

/// Name of the Ericsson rule set (default parameters, standard overtime).
pub const ERICSSON_RULE_SET: &str = "ericsson";

/// Name of the rule set with a second overtime tier.
pub const EXTENDED_OVERTIME_RULE_SET: &str = "extended_overtime";

/// Holds the pay rule engines of every known employer, keyed by name.
///
/// # Example
///
/// ```
/// use weekly_pay_engine::config::RuleSetRegistry;
/// use weekly_pay_engine::models::CalculationStatus;
/// use rust_decimal::Decimal;
///
/// let registry = RuleSetRegistry::with_builtin_rule_sets().unwrap();
/// let engine = registry.get("ericsson").unwrap();
///
/// let result = engine.evaluate(Decimal::from(10), 73);
/// assert_eq!(result.status(), CalculationStatus::TooManyHours);
/// assert_eq!(result.total_pay(), Decimal::from(895));
///
/// assert!(registry.get("unknown").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleSetRegistry {
    rule_sets: HashMap<String, PayRuleEngine>,
}

impl RuleSetRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in rule sets.
    ///
    /// - `default`: default parameters, standard overtime
    /// - `ericsson`: default parameters, standard overtime
    /// - `extended_overtime`: minimum $9.00/h, overtime at 150% after 40 hours,
    ///   200% of base after 50 hours, at most 70 hours a week
    pub fn with_builtin_rule_sets() -> EngineResult<Self> {
        let mut registry = Self::new();

        registry.register(DEFAULT_RULE_SET, PayRuleEngine::default())?;
        registry.register(ERICSSON_RULE_SET, PayRuleEngine::default())?;

        let extended_params =
            RuleParameters::new(Decimal::new(90, 1), 40, Decimal::new(15, 1), 70)?;
        let second_tier = TwoTierOvertime::new(50, Decimal::new(20, 1))?;
        registry.register(
            EXTENDED_OVERTIME_RULE_SET,
            PayRuleEngine::with_two_tier_overtime(extended_params, second_tier)?,
        )?;

        Ok(registry)
    }

    /// Registers an engine under a name.
    ///
    /// Returns [`EngineError::DuplicateRuleSet`] if the name is taken.
    pub fn register(&mut self, name: impl Into<String>, engine: PayRuleEngine) -> EngineResult<()> {
        let name = name.into();
        if self.rule_sets.contains_key(&name) {
            return Err(EngineError::DuplicateRuleSet { name });
        }

        debug!(
            rule_set = %name,
            min_hourly_rate = %engine.parameters().min_hourly_rate(),
            overtime_threshold_hours = engine.parameters().overtime_threshold_hours(),
            max_weekly_hours = engine.parameters().max_weekly_hours(),
            "Registered rule set"
        );
        self.rule_sets.insert(name, engine);
        Ok(())
    }

    /// Looks up the engine registered under a name.
    pub fn get(&self, name: &str) -> EngineResult<&PayRuleEngine> {
        self.rule_sets
            .get(name)
            .ok_or_else(|| EngineError::RuleSetNotFound {
                name: name.to_string(),
            })
    }

    /// Returns all rule-set names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rule_sets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns all rule sets as `(name, engine)` pairs, sorted by name.
    pub fn iter_sorted(&self) -> Vec<(&str, &PayRuleEngine)> {
        let mut entries: Vec<(&str, &PayRuleEngine)> = self
            .rule_sets
            .iter()
            .map(|(name, engine)| (name.as_str(), engine))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Number of registered rule sets.
    pub fn len(&self) -> usize {
        self.rule_sets.len()
    }

    /// Returns true if no rule set is registered.
    pub fn is_empty(&self) -> bool {
        self.rule_sets.is_empty()
    }
}
