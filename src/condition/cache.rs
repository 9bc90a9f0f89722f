//! Parsed condition cache keyed by source text
//!
//! Hosts evaluate the same condition sources for thousands of entities, so
//! repeated parsing is the hot path this removes.

use crate::condition::ast::ConditionSet;
use crate::state::ConditionMap;
use ahash::AHashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

/// Global cache of parsed condition sets
static CONDITION_CACHE: Lazy<RwLock<AHashMap<String, ConditionSet>>> =
    Lazy::new(|| RwLock::new(AHashMap::with_capacity(256)));

/// Parse a condition source, reusing the cached set for repeated sources.
#[inline]
pub fn get_or_parse(source: &str) -> ConditionSet {
    // Fast path: check read lock first
    {
        let cache = CONDITION_CACHE.read();
        if let Some(set) = cache.get(source) {
            return set.clone();
        }
    }

    // Slow path: parse and cache
    let set = ConditionSet::parse(source);
    CONDITION_CACHE.write().insert(source.to_string(), set.clone());
    set
}

/// Test a condition source against the given values, using the cached parse.
/// An empty source holds trivially.
#[inline]
pub fn test_condition(source: &str, conditions: &ConditionMap) -> bool {
    if source.is_empty() {
        return true;
    }
    get_or_parse(source).test(conditions)
}

/// Clear the condition cache (useful for testing)
pub fn clear_cache() {
    CONDITION_CACHE.write().clear();
}

/// Number of distinct sources currently cached
pub fn cache_size() -> usize {
    CONDITION_CACHE.read().len()
}
