//! Built-in mapping rules.
//!
//! The default rule set ships in a fixed priority order; array order is
//! evaluation order. Built-in rules use native predicates and assigners,
//! and are referenced by name in the interchange format rather than
//! serialized as code.

use prettymap_core::{titlecase, Row};

use crate::rule::{Assign, Predicate, Rule};

/// The default rule set, in priority order.
pub fn default_rules() -> Vec<Rule> {
    vec![
        external_referrals(),
        google_ads(),
        microsoft_ads(),
        social_media(),
        email_marketing(),
        direct_traffic(),
        organic_search(),
        redtrack_pipe(),
        rt_source_for_network(),
        rt_campaign_for_name(),
    ]
}

/// Look up a built-in rule by name.
pub fn builtin_rule(name: &str) -> Option<Rule> {
    default_rules().into_iter().find(|rule| rule.name == name)
}

/// The built-in rule names, in priority order.
pub fn builtin_rule_names() -> Vec<String> {
    default_rules().into_iter().map(|rule| rule.name).collect()
}

/// Case-insensitive substring match on the original network. The network
/// column must be non-empty.
fn network_contains_any(row: &Row, terms: &[&str]) -> bool {
    if row.original_network.is_empty() {
        return false;
    }
    let network = row.original_network.to_lowercase();
    terms.iter().any(|term| network.contains(term))
}

fn external_referrals() -> Rule {
    Rule::new(
        "External Referrals",
        Predicate::Builtin(|row| {
            (row.source == "Website" || row.source == "Referral")
                && !row.original_name.is_empty()
                && !row.original_name.contains("sondercare.com")
        }),
    )
    .with_network("External Referral")
    .with_name(Assign::Computed(|row| format!("Ref: {}", row.original_name)))
}

fn google_ads() -> Rule {
    Rule::new(
        "Google Ads",
        Predicate::Builtin(|row| {
            network_contains_any(row, &["google", "adwords", "googleads"])
        }),
    )
    .with_network("Google Ads")
}

fn microsoft_ads() -> Rule {
    Rule::new(
        "Microsoft Ads",
        Predicate::Builtin(|row| network_contains_any(row, &["bing", "microsoft"])),
    )
    .with_network("Microsoft Ads")
}

fn social_media() -> Rule {
    Rule::new(
        "Social Media",
        Predicate::Builtin(|row| {
            row.source == "Social Network"
                || network_contains_any(row, &["facebook", "instagram", "linkedin", "twitter"])
        }),
    )
    .with_network("Social Media")
    .with_name(Assign::Computed(|row| {
        format!("{} Post", titlecase(&row.original_network))
    }))
}

fn email_marketing() -> Rule {
    Rule::new(
        "Email Marketing",
        Predicate::Builtin(|row| network_contains_any(row, &["klaviyo", "email"])),
    )
    .with_network("Email Marketing")
}

fn direct_traffic() -> Rule {
    Rule::new(
        "Direct Traffic",
        Predicate::Builtin(|row| {
            row.source == "Website" && row.original_name.contains("sondercare.com")
        }),
    )
    .with_network("Direct/Internal")
    .with_name("Direct/Internal")
}

fn organic_search() -> Rule {
    Rule::new(
        "Organic Search",
        Predicate::Builtin(|row| {
            row.source == "Search Engine" || row.source == "Organic Search"
        }),
    )
    .with_network("Organic Search")
    .with_name(Assign::Computed(|row| {
        let name = if row.original_name.is_empty() {
            "Unknown"
        } else {
            row.original_name.as_str()
        };
        format!("Search: {}", name)
    }))
}

fn redtrack_pipe() -> Rule {
    Rule::new(
        "RedTrack Campaigns with Pipe",
        Predicate::Builtin(|row| row.rt_campaign.contains(" | ")),
    )
    .with_network(Assign::Computed(|row| {
        let first = row.rt_campaign.split(" | ").next().unwrap_or("");
        if first.is_empty() {
            row.original_network.clone()
        } else {
            first.to_string()
        }
    }))
    .with_name(Assign::Computed(|row| {
        match row.rt_campaign.split(" | ").nth(1) {
            Some(second) => second.to_string(),
            None => row.original_name.clone(),
        }
    }))
}

fn rt_source_for_network() -> Rule {
    // Strict absence check on the pretty network, not the default gate.
    Rule::new(
        "RT Source for Network",
        Predicate::Builtin(|row| !row.rt_source.is_empty() && row.pretty_network.is_empty()),
    )
    .with_network(Assign::Computed(|row| row.rt_source.clone()))
}

fn rt_campaign_for_name() -> Rule {
    Rule::new(
        "RT Campaign for Name",
        Predicate::Builtin(|row| !row.rt_campaign.is_empty() && row.pretty_name.is_empty()),
    )
    .with_name(Assign::Computed(|row| row.rt_campaign.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fire(rule: &Rule, row: &mut Row) {
        if rule.condition.eval(row) {
            if let Some(assign) = &rule.set_pretty_network {
                row.pretty_network = assign.resolve(row);
            }
            if let Some(assign) = &rule.set_pretty_name {
                row.pretty_name = assign.resolve(row);
            }
        }
    }

    #[test]
    fn test_default_rule_order() {
        assert_eq!(
            builtin_rule_names(),
            vec![
                "External Referrals",
                "Google Ads",
                "Microsoft Ads",
                "Social Media",
                "Email Marketing",
                "Direct Traffic",
                "Organic Search",
                "RedTrack Campaigns with Pipe",
                "RT Source for Network",
                "RT Campaign for Name",
            ]
        );
    }

    #[test]
    fn test_builtin_lookup() {
        assert!(builtin_rule("Google Ads").is_some());
        assert!(builtin_rule("google ads").is_none());
    }

    #[test]
    fn test_external_referrals() {
        let mut row = Row::new()
            .with_source("Referral")
            .with_original_name("blog.example.com");
        fire(&external_referrals(), &mut row);
        assert_eq!(row.pretty_network, "External Referral");
        assert_eq!(row.pretty_name, "Ref: blog.example.com");

        let mut internal = Row::new()
            .with_source("Website")
            .with_original_name("sondercare.com/beds");
        fire(&external_referrals(), &mut internal);
        assert_eq!(internal.pretty_network, "");
    }

    #[test]
    fn test_google_ads_matches_substring() {
        let mut row = Row::new().with_original_network("AdWords Brand");
        fire(&google_ads(), &mut row);
        assert_eq!(row.pretty_network, "Google Ads");
    }

    #[test]
    fn test_social_media_titlecases_network() {
        let mut row = Row::new().with_original_network("FACEBOOK");
        fire(&social_media(), &mut row);
        assert_eq!(row.pretty_network, "Social Media");
        assert_eq!(row.pretty_name, "Facebook Post");
    }

    #[test]
    fn test_social_media_empty_network_from_source() {
        let mut row = Row::new().with_source("Social Network");
        fire(&social_media(), &mut row);
        assert_eq!(row.pretty_name, " Post");
    }

    #[test]
    fn test_direct_traffic() {
        let mut row = Row::new()
            .with_source("Website")
            .with_original_name("sondercare.com landing");
        fire(&direct_traffic(), &mut row);
        assert_eq!(row.pretty_network, "Direct/Internal");
        assert_eq!(row.pretty_name, "Direct/Internal");
    }

    #[test]
    fn test_organic_search_unknown_name() {
        let mut row = Row::new().with_source("Search Engine");
        fire(&organic_search(), &mut row);
        assert_eq!(row.pretty_name, "Search: Unknown");
    }

    #[test]
    fn test_redtrack_pipe_split() {
        let mut row = Row::new().with_rt_campaign("Network X | Campaign Y");
        fire(&redtrack_pipe(), &mut row);
        assert_eq!(row.pretty_network, "Network X");
        assert_eq!(row.pretty_name, "Campaign Y");
    }

    #[test]
    fn test_redtrack_pipe_empty_first_part_falls_back() {
        let mut row = Row::new()
            .with_original_network("fallback-net")
            .with_rt_campaign(" | Campaign Y");
        fire(&redtrack_pipe(), &mut row);
        assert_eq!(row.pretty_network, "fallback-net");
        assert_eq!(row.pretty_name, "Campaign Y");
    }

    #[test]
    fn test_rt_source_requires_absent_pretty_network() {
        let rule = rt_source_for_network();
        let mut row = Row::new().with_rt_source("rt-src");
        assert!(rule.condition.eval(&row));

        row.pretty_network = "already set".to_string();
        assert!(!rule.condition.eval(&row));
    }

    #[test]
    fn test_rt_campaign_requires_absent_pretty_name() {
        let rule = rt_campaign_for_name();
        let mut row = Row::new().with_rt_campaign("rt-campaign");
        assert!(rule.condition.eval(&row));

        row.pretty_name = "already set".to_string();
        assert!(!rule.condition.eval(&row));
    }
}
