//! Rule-set configuration for the Weekly Pay Engine.
//!
//! Rule sets are defined in code and collected in a [`RuleSetRegistry`] that is
//! built once at startup and passed explicitly to whoever needs it.
//!
//! # Example
//!
//! ```
//! use weekly_pay_engine::config::RuleSetRegistry;
//!
//! let registry = RuleSetRegistry::with_builtin_rule_sets().unwrap();
//! println!("Loaded rule sets: {:?}", registry.names());
//! ```

mod registry;

pub use registry::{
    DEFAULT_RULE_SET, ERICSSON_RULE_SET, EXTENDED_OVERTIME_RULE_SET, RuleSetRegistry,
};
