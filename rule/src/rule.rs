//! Rule types.
//!
//! A rule pairs an applicability test with up to two field assignments.
//! Assignments are either literal strings or functions of the row; the
//! evaluator resolves the variant at write time.

use prettymap_core::Row;

use crate::condition::Condition;
use crate::error::{RuleError, RuleResult};

/// How a rule produces a value for a pretty field.
#[derive(Debug, Clone)]
pub enum Assign {
    /// A fixed string.
    Literal(String),
    /// A function of the row.
    Computed(fn(&Row) -> String),
}

impl Assign {
    /// Resolve the assignment against a row.
    pub fn resolve(&self, row: &Row) -> String {
        match self {
            Assign::Literal(value) => value.clone(),
            Assign::Computed(f) => f(row),
        }
    }

    /// The literal value, if this assignment is representable as data.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Assign::Literal(value) => Some(value),
            Assign::Computed(_) => None,
        }
    }
}

impl From<&str> for Assign {
    fn from(value: &str) -> Self {
        Assign::Literal(value.to_string())
    }
}

impl From<String> for Assign {
    fn from(value: String) -> Self {
        Assign::Literal(value)
    }
}

/// A rule's applicability test.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// Native predicate, used by the built-in rules.
    Builtin(fn(&Row) -> bool),
    /// Data condition, used by user-defined rules.
    Where(Condition),
}

impl Predicate {
    /// Evaluate against a row.
    pub fn eval(&self, row: &Row) -> bool {
        match self {
            Predicate::Builtin(f) => f(row),
            Predicate::Where(cond) => cond.eval(row),
        }
    }
}

/// One conditional mapping rule.
#[derive(Debug, Clone)]
pub struct Rule {
    /// Unique display/reference key.
    pub name: String,
    /// Applicability test.
    pub condition: Predicate,
    /// Network assignment, if the rule touches the network field.
    pub set_pretty_network: Option<Assign>,
    /// Name assignment, if the rule touches the name field.
    pub set_pretty_name: Option<Assign>,
    /// Disabled rules are skipped by the evaluator.
    pub enabled: bool,
}

impl Rule {
    /// A rule with no assignments yet (add them with the builder methods).
    pub fn new(name: impl Into<String>, condition: Predicate) -> Self {
        Self {
            name: name.into(),
            condition,
            set_pretty_network: None,
            set_pretty_name: None,
            enabled: true,
        }
    }

    pub fn with_network(mut self, assign: impl Into<Assign>) -> Self {
        self.set_pretty_network = Some(assign.into());
        self
    }

    pub fn with_name(mut self, assign: impl Into<Assign>) -> Self {
        self.set_pretty_name = Some(assign.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Registration-time validation: a rule must be named, must assign at
    /// least one field, and any match patterns must compile. User-defined
    /// rules are restricted to literal assignments so the rule set always
    /// round-trips through the interchange format.
    pub fn validate(&self) -> RuleResult<()> {
        if self.name.trim().is_empty() {
            return Err(RuleError::invalid_rule(&self.name, "rule name is empty"));
        }
        if self.set_pretty_network.is_none() && self.set_pretty_name.is_none() {
            return Err(RuleError::invalid_rule(
                &self.name,
                "rule assigns neither pretty field",
            ));
        }
        if let Predicate::Where(cond) = &self.condition {
            cond.validate()?;
            let computed = [&self.set_pretty_network, &self.set_pretty_name]
                .into_iter()
                .flatten()
                .any(|a| a.as_literal().is_none());
            if computed {
                return Err(RuleError::invalid_rule(
                    &self.name,
                    "computed assignments are reserved for built-in rules",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prettymap_core::Field;

    #[test]
    fn test_assign_resolve() {
        let row = Row::new().with_original_name("spring");
        assert_eq!(Assign::from("fixed").resolve(&row), "fixed");
        let computed = Assign::Computed(|row| format!("Ref: {}", row.original_name));
        assert_eq!(computed.resolve(&row), "Ref: spring");
        assert!(computed.as_literal().is_none());
    }

    #[test]
    fn test_validate_requires_name() {
        let rule = Rule::new("  ", Predicate::Where(Condition::All(vec![]))).with_network("X");
        assert!(rule.validate().is_err());
    }

    #[test]
    fn test_validate_requires_assignment() {
        let rule = Rule::new("No-op", Predicate::Where(Condition::All(vec![])));
        assert!(rule.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_computed_on_declarative() {
        let rule = Rule::new(
            "Sneaky",
            Predicate::Where(Condition::Present {
                field: Field::Source,
            }),
        )
        .with_name(Assign::Computed(|row| row.source.clone()));
        assert!(rule.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_declarative_literals() {
        let rule = Rule::new(
            "Paid Social",
            Predicate::Where(Condition::Contains {
                field: Field::OriginalNetwork,
                value: "tiktok".into(),
            }),
        )
        .with_network("Social Media");
        assert!(rule.validate().is_ok());
    }
}
