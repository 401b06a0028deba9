//! Declarative rule conditions.
//!
//! Conditions are a small data AST so user-defined rules can round-trip
//! through the JSON interchange format. Built-in rules use native
//! predicates instead (see `builtin`).

use prettymap_core::{Field, Row};
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{RuleError, RuleResult};

/// A data-representable predicate over a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// All sub-conditions hold. Empty list holds.
    All(Vec<Condition>),
    /// At least one sub-condition holds. Empty list does not.
    Any(Vec<Condition>),
    /// The sub-condition does not hold.
    Not(Box<Condition>),
    /// Exact match on a column.
    Equals { field: Field, value: String },
    /// Case-insensitive substring match. The column must be non-empty.
    Contains { field: Field, value: String },
    /// Case-insensitive substring match against any of the terms.
    /// The column must be non-empty.
    ContainsAny { field: Field, values: Vec<String> },
    /// Column is non-empty.
    Present { field: Field },
    /// Column is empty.
    Absent { field: Field },
    /// Column matches a regular expression. Patterns are validated when
    /// the rule is admitted, so evaluation treats a bad pattern as no match.
    Matches { field: Field, pattern: String },
}

impl Condition {
    /// Evaluate against a row.
    pub fn eval(&self, row: &Row) -> bool {
        match self {
            Condition::All(conds) => conds.iter().all(|c| c.eval(row)),
            Condition::Any(conds) => conds.iter().any(|c| c.eval(row)),
            Condition::Not(cond) => !cond.eval(row),
            Condition::Equals { field, value } => row.get(*field) == value,
            Condition::Contains { field, value } => {
                let haystack = row.get(*field).to_lowercase();
                !haystack.is_empty() && haystack.contains(&value.to_lowercase())
            }
            Condition::ContainsAny { field, values } => {
                let haystack = row.get(*field).to_lowercase();
                !haystack.is_empty()
                    && values.iter().any(|v| haystack.contains(&v.to_lowercase()))
            }
            Condition::Present { field } => !row.get(*field).is_empty(),
            Condition::Absent { field } => row.get(*field).is_empty(),
            Condition::Matches { field, pattern } => match Regex::new(pattern) {
                Ok(re) => re.is_match(row.get(*field)),
                Err(_) => false,
            },
        }
    }

    /// Validate every match pattern in the condition tree.
    pub fn validate(&self) -> RuleResult<()> {
        match self {
            Condition::All(conds) | Condition::Any(conds) => {
                conds.iter().try_for_each(|c| c.validate())
            }
            Condition::Not(cond) => cond.validate(),
            Condition::Matches { pattern, .. } => Regex::new(pattern)
                .map(|_| ())
                .map_err(|e| RuleError::invalid_pattern(pattern, e.to_string())),
            _ => Ok(()),
        }
    }
}
