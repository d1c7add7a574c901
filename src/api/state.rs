//! Application state for the Weekly Pay Engine API.

use std::sync::Arc;

use crate::config::RuleSetRegistry;

/// Shared application state.
///
/// Holds the rule-set registry built at startup. Handlers only read it.
#[derive(Clone)]
pub struct AppState {
    registry: Arc<RuleSetRegistry>,
}

impl AppState {
    /// Creates a new application state around a fully built registry.
    pub fn new(registry: RuleSetRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Returns a reference to the rule-set registry.
    pub fn registry(&self) -> &RuleSetRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_registry() {
        let state = AppState::new(RuleSetRegistry::with_builtin_rule_sets().unwrap());
        let cloned = state.clone();
        assert!(std::ptr::eq(state.registry(), cloned.registry()));
    }
}
