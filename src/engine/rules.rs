//! Permitted-edge rules that gate transitions.

use crate::core::StateId;
use serde::{Deserialize, Serialize};

/// A directed edge the machine is permitted to follow.
///
/// Rules are registered per source state; multiple rules may share a
/// source, and duplicate edges are stored as-is (harmless, not
/// deduplicated). A rule may name states that carry no hooks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRule<S: StateId> {
    /// Source state of the permitted edge
    pub from: S,
    /// Target state of the permitted edge
    pub to: S,
}

impl<S: StateId> TransitionRule<S> {
    /// Create a rule permitting `from -> to`.
    pub fn new(from: S, to: S) -> Self {
        Self { from, to }
    }

    /// Whether this rule permits moving to `target`.
    pub fn permits(&self, target: &S) -> bool {
        self.to == *target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_permits_its_target() {
        let rule = TransitionRule::new(1u32, 2u32);
        assert!(rule.permits(&2));
        assert!(!rule.permits(&3));
    }

    #[test]
    fn self_loop_rules_are_allowed() {
        let rule = TransitionRule::new(1u32, 1u32);
        assert!(rule.permits(&1));
    }

    #[test]
    fn duplicate_rules_compare_equal() {
        let a = TransitionRule::new(1u32, 2u32);
        let b = TransitionRule::new(1u32, 2u32);
        assert_eq!(a, b);
    }
}
