//! Row data model for campaign mapping.
//!
//! A row is one unit of mapping work: the original network and campaign
//! name from an imported file, the auxiliary RedTrack tracking fields,
//! and the derived pretty values. Fields are plain strings where the
//! empty string means "unset", mirroring how imported cells arrive.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Selector for one of the seven row columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Traffic-source category.
    Source,
    /// Raw network/channel identifier.
    OriginalNetwork,
    /// Raw campaign name.
    OriginalName,
    /// RedTrack source.
    RtSource,
    /// RedTrack campaign.
    RtCampaign,
    /// Derived network value.
    PrettyNetwork,
    /// Derived campaign-name value.
    PrettyName,
}

impl Field {
    /// Column name as it appears in the interchange format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Source => "source",
            Field::OriginalNetwork => "original_network",
            Field::OriginalName => "original_name",
            Field::RtSource => "rt_source",
            Field::RtCampaign => "rt_campaign",
            Field::PrettyNetwork => "pretty_network",
            Field::PrettyName => "pretty_name",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One traffic/campaign record with original and derived fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    /// Traffic-source category (e.g. "Website", "Social Network").
    pub source: String,
    /// Raw network/channel identifier.
    pub original_network: String,
    /// Raw campaign name.
    pub original_name: String,
    /// RedTrack source field.
    pub rt_source: String,
    /// RedTrack campaign field (may encode "network | name" pairs).
    pub rt_campaign: String,
    /// Derived network value. Empty until the engine (or the user) sets it.
    pub pretty_network: String,
    /// Derived campaign-name value. Empty until the engine (or the user) sets it.
    pub pretty_name: String,
}

impl Row {
    /// An empty row.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, value: impl Into<String>) -> Self {
        self.source = value.into();
        self
    }

    pub fn with_original_network(mut self, value: impl Into<String>) -> Self {
        self.original_network = value.into();
        self
    }

    pub fn with_original_name(mut self, value: impl Into<String>) -> Self {
        self.original_name = value.into();
        self
    }

    pub fn with_rt_source(mut self, value: impl Into<String>) -> Self {
        self.rt_source = value.into();
        self
    }

    pub fn with_rt_campaign(mut self, value: impl Into<String>) -> Self {
        self.rt_campaign = value.into();
        self
    }

    /// Get the value of a column. Empty means unset.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Source => &self.source,
            Field::OriginalNetwork => &self.original_network,
            Field::OriginalName => &self.original_name,
            Field::RtSource => &self.rt_source,
            Field::RtCampaign => &self.rt_campaign,
            Field::PrettyNetwork => &self.pretty_network,
            Field::PrettyName => &self.pretty_name,
        }
    }

    /// Set the value of a column.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Source => self.source = value,
            Field::OriginalNetwork => self.original_network = value,
            Field::OriginalName => self.original_name = value,
            Field::RtSource => self.rt_source = value,
            Field::RtCampaign => self.rt_campaign = value,
            Field::PrettyNetwork => self.pretty_network = value,
            Field::PrettyName => self.pretty_name = value,
        }
    }

    /// True while the pretty network is still overridable: empty or equal
    /// to the original network. A value a rule (or the user) deliberately
    /// set to something different is not default.
    pub fn network_is_default(&self) -> bool {
        self.pretty_network.is_empty() || self.pretty_network == self.original_network
    }

    /// True while the pretty name is still overridable: empty or equal to
    /// the original campaign name.
    pub fn name_is_default(&self) -> bool {
        self.pretty_name.is_empty() || self.pretty_name == self.original_name
    }
}
