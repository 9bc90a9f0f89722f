//! Read-only testing and in-place application of condition sets

use crate::condition::ast::ConditionSet;
use crate::state::ConditionMap;
use rand::Rng;

/// Condition name that reads as a fresh random value in 0..100 each time a
/// test evaluates it.
pub const RANDOM_CONDITION: &str = "random";

impl ConditionSet {
    /// Check whether the given condition values satisfy this set.
    ///
    /// Conditions the map does not contain read as 0; the map itself is
    /// never modified. Members are evaluated in declaration order and the
    /// scan stops early once the outcome is decided: an "and" set returns
    /// false at its first false member, an "or" set returns true at its
    /// first true one. An empty "and" set is true, an empty "or" set false.
    pub fn test(&self, conditions: &ConditionMap) -> bool {
        for expression in &self.expressions {
            let value = if expression.name == RANDOM_CONDITION {
                rand::thread_rng().gen_range(0..100)
            } else {
                conditions.value(&expression.name)
            };
            let result = expression.eval(value) != 0;
            if result == self.is_or {
                return result;
            }
        }
        for child in &self.children {
            let result = child.test(conditions);
            if result == self.is_or {
                return result;
            }
        }
        !self.is_or
    }

    /// Apply every expression to the given condition values, in declaration
    /// order, inserting missing conditions at 0 first.
    ///
    /// Nested sets are then applied unconditionally; the and/or combinator
    /// has no meaning on this path, so a set meant for applying should not
    /// contain nested groups, but any that are present still run. `random`
    /// is not special here: it reads and writes an ordinary entry of that
    /// name.
    pub fn apply(&self, conditions: &mut ConditionMap) {
        for expression in &self.expressions {
            let slot = conditions.slot(&expression.name);
            *slot = expression.eval(*slot);
        }
        for child in &self.children {
            child.apply(conditions);
        }
    }
}
