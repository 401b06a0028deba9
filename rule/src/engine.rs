//! The rule engine: evaluation and rule-set management.

use prettymap_core::Row;

use crate::builtin::default_rules;
use crate::dictionary::Dictionary;
use crate::error::RuleResult;
use crate::interchange;
use crate::rule::Rule;

/// Evaluation context owning the ordered rule set and the network
/// dictionary. Construct one per session and pass it explicitly; there is
/// no global registry, so test isolation is trivial.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<Rule>,
    dictionary: Dictionary,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine {
    /// Engine with the built-in rules and network dictionary.
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
            dictionary: Dictionary::with_builtin_networks(),
        }
    }

    /// Engine with no rules and an empty dictionary.
    pub fn empty() -> Self {
        Self {
            rules: Vec::new(),
            dictionary: Dictionary::empty(),
        }
    }

    /// Engine with an explicit rule set and dictionary. The caller is
    /// trusted to pass valid rules (see `add_rule` for validated entry).
    pub fn with_rules(rules: Vec<Rule>, dictionary: Dictionary) -> Self {
        Self { rules, dictionary }
    }

    // ==================== Evaluation ====================

    /// Derive pretty values for one row in place.
    ///
    /// The dictionary seeds `pretty_network` first, then rules run in
    /// declaration order. Each pretty field accepts a write only while it
    /// is still default (empty or equal to its original counterpart), so
    /// the first matching rule wins that field. A later rule can still
    /// overwrite a value that happens to equal the unmodified original;
    /// that re-open-for-override behavior is intentional.
    pub fn apply_to_row(&self, row: &mut Row) {
        self.dictionary.apply(row);

        for rule in &self.rules {
            if !rule.enabled || !rule.condition.eval(row) {
                continue;
            }
            if let Some(assign) = &rule.set_pretty_network {
                if row.network_is_default() {
                    row.pretty_network = assign.resolve(row);
                }
            }
            if let Some(assign) = &rule.set_pretty_name {
                if row.name_is_default() {
                    row.pretty_name = assign.resolve(row);
                }
            }
        }
    }

    /// Derive pretty values for every row, preserving order.
    pub fn apply(&self, rows: &mut [Row]) {
        for row in rows.iter_mut() {
            self.apply_to_row(row);
        }
    }

    // ==================== Management ====================

    /// Rule names in priority order.
    pub fn rule_names(&self) -> Vec<String> {
        self.rules.iter().map(|rule| rule.name.clone()).collect()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn dictionary_mut(&mut self) -> &mut Dictionary {
        &mut self.dictionary
    }

    /// Enable or disable a rule by exact name. Unknown names are ignored.
    pub fn toggle_rule(&mut self, name: &str, enabled: bool) {
        if let Some(rule) = self.rules.iter_mut().find(|rule| rule.name == name) {
            rule.enabled = enabled;
        }
    }

    /// Append a rule at the lowest priority. The rule is validated before
    /// it is admitted.
    pub fn add_rule(&mut self, rule: Rule) -> RuleResult<()> {
        rule.validate()?;
        self.rules.push(rule);
        Ok(())
    }

    /// Remove the first rule with an exactly matching name. Unknown names
    /// are ignored.
    pub fn remove_rule(&mut self, name: &str) {
        if let Some(index) = self.rules.iter().position(|rule| rule.name == name) {
            self.rules.remove(index);
        }
    }

    /// Serialize the rule set to the JSON interchange format.
    pub fn export_rules(&self) -> String {
        interchange::export(&self.rules)
    }

    /// Replace the rule set from the JSON interchange format.
    ///
    /// The whole document is parsed and validated before anything is
    /// replaced; on any failure the existing rule set is left untouched.
    /// Returns the number of rules imported.
    pub fn import_rules(&mut self, json: &str) -> RuleResult<usize> {
        let rules = interchange::import(json)?;
        let count = rules.len();
        self.rules = rules;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::Condition;
    use crate::rule::{Predicate, Rule};
    use prettymap_core::Field;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_identity_default_when_nothing_matches() {
        let engine = RuleEngine::new();
        let mut row = Row::new()
            .with_source("Billboard")
            .with_original_network("skywriting")
            .with_original_name("flyover");
        engine.apply_to_row(&mut row);
        assert_eq!(row.pretty_network, "");
        assert_eq!(row.pretty_name, "");
    }

    #[test]
    fn test_dictionary_seed_is_case_insensitive() {
        let engine = RuleEngine::new();
        let mut upper = Row::new().with_original_network("GOOGLE");
        let mut lower = Row::new().with_original_network("google");
        engine.apply_to_row(&mut upper);
        engine.apply_to_row(&mut lower);
        assert_eq!(upper.pretty_network, lower.pretty_network);
        assert_eq!(upper.pretty_network, "Google Ads");
    }

    #[test]
    fn test_rule_order_determines_network_winner() {
        // "google email" matches both Google Ads and Email Marketing for
        // the network field; the earlier rule wins and the later write is
        // suppressed by the default gate.
        let engine = RuleEngine::new();
        let mut row = Row::new().with_original_network("google email");
        engine.apply_to_row(&mut row);
        assert_eq!(row.pretty_network, "Google Ads");
    }

    #[test]
    fn test_independent_field_resolution() {
        // Network comes from the Google Ads rule, name from the Organic
        // Search rule, in the same pass.
        let engine = RuleEngine::new();
        let mut row = Row::new()
            .with_source("Search Engine")
            .with_original_network("google cpc");
        engine.apply_to_row(&mut row);
        assert_eq!(row.pretty_network, "Google Ads");
        assert_eq!(row.pretty_name, "Search: Unknown");
    }

    #[test]
    fn test_first_rule_claims_both_fields_over_pipe_split() {
        // External Referrals claims both fields; the later pipe-split rule
        // matches but finds neither field still default.
        let engine = RuleEngine::new();
        let mut row = Row::new()
            .with_source("Website")
            .with_original_name("partner-blog")
            .with_rt_campaign("Affiliate | Spring Sale");
        engine.apply_to_row(&mut row);
        assert_eq!(row.pretty_network, "External Referral");
        assert_eq!(row.pretty_name, "Ref: partner-blog");
    }

    #[test]
    fn test_pipe_split_when_unclaimed() {
        let engine = RuleEngine::new();
        let mut row = Row::new().with_rt_campaign("Network X | Campaign Y");
        engine.apply_to_row(&mut row);
        assert_eq!(row.pretty_network, "Network X");
        assert_eq!(row.pretty_name, "Campaign Y");
    }

    #[test]
    fn test_rt_fallbacks_without_pipe() {
        let engine = RuleEngine::new();
        let mut row = Row::new()
            .with_rt_source("rt-src")
            .with_rt_campaign("plain-campaign");
        engine.apply_to_row(&mut row);
        assert_eq!(row.pretty_network, "rt-src");
        assert_eq!(row.pretty_name, "plain-campaign");
    }

    #[test]
    fn test_disabled_rule_is_skipped() {
        let mut engine = RuleEngine::new();
        engine.toggle_rule("Google Ads", false);
        let mut row = Row::new().with_original_network("googleads brand");
        engine.apply_to_row(&mut row);
        assert_eq!(row.pretty_network, "");

        engine.toggle_rule("Google Ads", true);
        engine.apply_to_row(&mut row);
        assert_eq!(row.pretty_network, "Google Ads");
    }

    #[test]
    fn test_toggle_unknown_rule_is_noop() {
        let mut engine = RuleEngine::new();
        let before = engine.rule_names();
        engine.toggle_rule("No Such Rule", false);
        assert_eq!(engine.rule_names(), before);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let engine = RuleEngine::new();
        let mut rows = vec![
            Row::new().with_original_network("google email"),
            Row::new()
                .with_source("Search Engine")
                .with_original_name("bed rails"),
            Row::new().with_rt_campaign("Network X | Campaign Y"),
            Row::new().with_rt_source("rt-src"),
        ];
        engine.apply(&mut rows);
        let first_pass = rows.clone();
        engine.apply(&mut rows);
        assert_eq!(rows, first_pass);
    }

    #[test]
    fn test_add_rule_appends_at_lowest_priority() {
        let mut engine = RuleEngine::new();
        let rule = Rule::new(
            "Paid Social",
            Predicate::Where(Condition::Contains {
                field: Field::OriginalNetwork,
                value: "tiktok".into(),
            }),
        )
        .with_network("Social Media");
        engine.add_rule(rule).unwrap();
        assert_eq!(engine.rule_names().last().map(String::as_str), Some("Paid Social"));

        let mut row = Row::new().with_original_network("TikTok Ads");
        engine.apply_to_row(&mut row);
        assert_eq!(row.pretty_network, "Social Media");
    }

    #[test]
    fn test_add_rule_rejects_invalid() {
        let mut engine = RuleEngine::new();
        let count = engine.rule_count();
        let rule = Rule::new("No-op", Predicate::Where(Condition::All(vec![])));
        assert!(engine.add_rule(rule).is_err());
        assert_eq!(engine.rule_count(), count);
    }

    #[test]
    fn test_remove_rule() {
        let mut engine = RuleEngine::new();
        engine.remove_rule("Google Ads");
        assert!(!engine.rule_names().iter().any(|n| n == "Google Ads"));

        // Unknown names are ignored.
        let before = engine.rule_names();
        engine.remove_rule("Google Ads");
        assert_eq!(engine.rule_names(), before);
    }

    #[test]
    fn test_failed_import_leaves_rules_untouched() {
        let mut engine = RuleEngine::new();
        let before = engine.rule_names();
        assert!(engine.import_rules("not an array").is_err());
        assert!(engine.import_rules("{\"builtin\": \"Google Ads\"}").is_err());
        assert_eq!(engine.rule_names(), before);
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut engine = RuleEngine::new();
        engine.toggle_rule("Microsoft Ads", false);
        let json = engine.export_rules();

        let mut other = RuleEngine::empty();
        let count = other.import_rules(&json).unwrap();
        assert_eq!(count, engine.rule_count());
        assert_eq!(other.rule_names(), engine.rule_names());

        // The disabled flag survives the round trip.
        let microsoft = other
            .rules()
            .iter()
            .find(|r| r.name == "Microsoft Ads")
            .unwrap();
        assert!(!microsoft.enabled);
    }
}
