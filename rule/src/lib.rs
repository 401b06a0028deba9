//! Prettymap Rule Engine
//!
//! Derive pretty network and campaign-name values for imported rows.
//!
//! Responsibilities:
//! - Seed pretty networks from the exact-match dictionary
//! - Scan the ordered rule set with per-field precedence gates
//! - Manage the rule set (add/remove/toggle)
//! - Round-trip rule sets through the JSON interchange format

mod builtin;
mod condition;
mod dictionary;
mod engine;
mod error;
mod interchange;
mod rule;

pub use builtin::{builtin_rule, builtin_rule_names, default_rules};
pub use condition::Condition;
pub use dictionary::Dictionary;
pub use engine::RuleEngine;
pub use error::{RuleError, RuleResult};
pub use interchange::RuleSpec;
pub use rule::{Assign, Predicate, Rule};
