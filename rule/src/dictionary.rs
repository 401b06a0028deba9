//! Exact-match network dictionary.
//!
//! Maps lowercased raw network strings to their canonical pretty network.
//! Simpler than rules: lookup only, no precedence logic of its own.

use std::collections::HashMap;

use prettymap_core::Row;

/// Built-in network table.
const NETWORKS: &[(&str, &str)] = &[
    ("google", "Google Ads"),
    ("adwords", "Google Ads"),
    ("googleads", "Google Ads"),
    ("google ads", "Google Ads"),
    ("google_ads", "Google Ads"),
    ("google ads - shop/p", "Google Ads"),
    ("google ads - s/d", "Google Ads"),
    ("sa360", "Google Ads"),
    ("bing", "Microsoft Ads"),
    ("bing ads", "Microsoft Ads"),
    ("bing_ads", "Microsoft Ads"),
    ("microsoft ads", "Microsoft Ads"),
    ("microsoft_ads", "Microsoft Ads"),
    ("facebook", "Social Media"),
    ("facebook ads", "Social Media"),
    ("facebook_ads", "Social Media"),
    ("instagram", "Social Media"),
    ("linkedin", "Social Media"),
    ("twitter", "Social Media"),
    ("meta", "Social Media"),
    ("meta ads", "Social Media"),
    ("meta_ads", "Social Media"),
    ("klaviyo", "Email Marketing"),
    ("email", "Email Marketing"),
    ("stackadapt", "Display Ads"),
    ("organic / direct / no referrer", "Direct/Internal"),
    ("organic search", "Organic Search"),
];

/// Exact-match lookup table from raw network strings to canonical pretty
/// networks. Read-only during evaluation.
#[derive(Debug, Clone)]
pub struct Dictionary {
    networks: HashMap<String, String>,
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::with_builtin_networks()
    }
}

impl Dictionary {
    /// An empty dictionary.
    pub fn empty() -> Self {
        Self {
            networks: HashMap::new(),
        }
    }

    /// The built-in network table.
    pub fn with_builtin_networks() -> Self {
        let networks = NETWORKS
            .iter()
            .map(|(key, pretty)| (key.to_string(), pretty.to_string()))
            .collect();
        Self { networks }
    }

    /// Look up the canonical pretty network for a raw network string.
    /// Keys are stored lowercased, so the match is case-insensitive.
    pub fn lookup(&self, network: &str) -> Option<&str> {
        self.networks
            .get(&network.to_lowercase())
            .map(|s| s.as_str())
    }

    /// Add or replace an entry. The key is lowercased.
    pub fn insert(&mut self, network: impl Into<String>, pretty: impl Into<String>) {
        self.networks
            .insert(network.into().to_lowercase(), pretty.into());
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }

    /// Seed `pretty_network` from the table. Only fires while the pretty
    /// network is still empty; unlike the rule gates this is a strict
    /// absence check, so a pretty value equal to the original is kept.
    pub fn apply(&self, row: &mut Row) {
        if !row.pretty_network.is_empty() {
            return;
        }
        if let Some(pretty) = self.lookup(&row.original_network) {
            row.pretty_network = pretty.to_string();
        }
    }
}
