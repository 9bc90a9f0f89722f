//! Condition Core - data-driven condition engine for game state
//!
//! This crate parses a small textual language describing named integer
//! "conditions," assembles the parsed lines into trees of AND/OR groups,
//! and evaluates or applies those trees against a caller-supplied mapping
//! of condition names to values. Hosts use it to gate content ("has this
//! flag," "counter above a threshold") and to mutate world state
//! ("increment that counter") without recompiling.
//!
//! ```
//! use condition_core::{ConditionMap, ConditionSet};
//!
//! let unlock = ConditionSet::parse(
//!     "or\n\t\"combat rating\" >= 10\n\thas \"license: Navy\"\n",
//! );
//!
//! let mut state = ConditionMap::new();
//! state.set("combat rating", 12);
//! assert!(unlock.test(&state));
//! ```

pub mod condition;
pub mod data;
pub mod error;
pub mod state;

pub use condition::{ConditionSet, Expression, Operator};
pub use data::{DataNode, DataWriter};
pub use error::{ConditionError, Result};
pub use state::ConditionMap;
