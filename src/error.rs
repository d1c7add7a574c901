//! Error types for the Weekly Pay Engine.
//!
//! Numeric input problems are never errors: they are reported through
//! [`CalculationStatus`](crate::models::CalculationStatus). The errors in this
//! module cover rule-set construction and lookup only.

use thiserror::Error;

/// The main error type for the Weekly Pay Engine.
///
/// # Example
///
/// ```
/// use weekly_pay_engine::error::EngineError;
///
/// let error = EngineError::RuleSetNotFound {
///     name: "acme".to_string(),
/// };
/// assert_eq!(error.to_string(), "Rule set not found: acme");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// No rule set is registered under the requested name.
    #[error("Rule set not found: {name}")]
    RuleSetNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// A rule set with this name is already registered.
    #[error("Rule set already registered: {name}")]
    DuplicateRuleSet {
        /// The name that was registered twice.
        name: String,
    },

    /// A rule parameter was outside its permitted range.
    #[error("Invalid rule parameter '{field}': {message}")]
    InvalidRuleParameter {
        /// The parameter that was rejected.
        field: String,
        /// A description of the permitted range.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
