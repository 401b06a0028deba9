//! JSON interchange format for rule sets.
//!
//! Predicates and assigner functions are not data, so the format carries
//! two rule kinds: built-in rules are referenced by name and resolved
//! against the fixed registry on import, while user-defined rules
//! serialize their condition and literal assignments inline. Import
//! validates the whole document before anything replaces the live rule
//! set.

use serde::{Deserialize, Serialize};

use crate::builtin::builtin_rule;
use crate::condition::Condition;
use crate::error::{RuleError, RuleResult};
use crate::rule::{Assign, Predicate, Rule};

/// One serialized rule definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleSpec {
    /// Reference to a built-in rule by name.
    Builtin {
        builtin: String,
        #[serde(default = "default_enabled")]
        enabled: bool,
    },
    /// Fully declarative rule: data condition plus literal assignments.
    Declarative {
        name: String,
        when: Condition,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        network: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        campaign: Option<String>,
        #[serde(default = "default_enabled")]
        enabled: bool,
    },
}

fn default_enabled() -> bool {
    true
}

/// Serialize a rule set. Always succeeds: declarative rules are restricted
/// to literal assignments at registration time.
pub fn export(rules: &[Rule]) -> String {
    let specs: Vec<RuleSpec> = rules.iter().map(spec_for).collect();
    serde_json::to_string_pretty(&specs).unwrap_or_else(|_| "[]".to_string())
}

/// Parse and validate a serialized rule set. The top level must be an
/// array; built-in references must name a registered rule; declarative
/// definitions must pass registration-time validation.
pub fn import(json: &str) -> RuleResult<Vec<Rule>> {
    let specs: Vec<RuleSpec> =
        serde_json::from_str(json).map_err(|e| RuleError::import_failed(e.to_string()))?;

    let mut rules = Vec::with_capacity(specs.len());
    for spec in specs {
        rules.push(rule_for(spec)?);
    }
    Ok(rules)
}

fn spec_for(rule: &Rule) -> RuleSpec {
    match &rule.condition {
        Predicate::Builtin(_) => RuleSpec::Builtin {
            builtin: rule.name.clone(),
            enabled: rule.enabled,
        },
        Predicate::Where(cond) => RuleSpec::Declarative {
            name: rule.name.clone(),
            when: cond.clone(),
            network: rule
                .set_pretty_network
                .as_ref()
                .and_then(|a| a.as_literal().map(String::from)),
            campaign: rule
                .set_pretty_name
                .as_ref()
                .and_then(|a| a.as_literal().map(String::from)),
            enabled: rule.enabled,
        },
    }
}

fn rule_for(spec: RuleSpec) -> RuleResult<Rule> {
    match spec {
        RuleSpec::Builtin { builtin, enabled } => {
            let mut rule =
                builtin_rule(&builtin).ok_or_else(|| RuleError::unknown_builtin(&builtin))?;
            rule.enabled = enabled;
            Ok(rule)
        }
        RuleSpec::Declarative {
            name,
            when,
            network,
            campaign,
            enabled,
        } => {
            let mut rule = Rule::new(name, Predicate::Where(when));
            if let Some(value) = network {
                rule = rule.with_network(Assign::Literal(value));
            }
            if let Some(value) = campaign {
                rule = rule.with_name(Assign::Literal(value));
            }
            rule.enabled = enabled;
            rule.validate()?;
            Ok(rule)
        }
    }
}
