//! Header auto-detection.
//!
//! Exports from different tools label the same logical columns
//! differently, so each logical column carries a preference list; the
//! first header that matches wins.

use crate::error::{IngestError, IngestResult};

const CAMPAIGN_HEADERS: &[&str] = &["campaign name", "campaign", "campaign_name", "name"];
const SOURCE_HEADERS: &[&str] = &["source", "traffic source", "channel grouping"];
const NETWORK_HEADERS: &[&str] = &["network", "source / medium", "medium"];
const RT_SOURCE_HEADERS: &[&str] = &["rt source", "rt_source", "redtrack source"];
const RT_CAMPAIGN_HEADERS: &[&str] = &["rt campaign", "rt_campaign", "redtrack campaign"];

/// Which of the two supported file shapes a header row matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsvShape {
    /// Campaign column plus a traffic-source column.
    Source,
    /// Campaign column plus a network column.
    Network,
}

/// Resolved column indexes for one file.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    pub shape: CsvShape,
    pub campaign: usize,
    pub source: Option<usize>,
    pub network: Option<usize>,
    pub rt_source: Option<usize>,
    pub rt_campaign: Option<usize>,
}

impl ColumnMap {
    /// Detect columns from a normalized (trimmed, lowercased) header row.
    pub fn detect(headers: &[String]) -> IngestResult<Self> {
        let campaign = match find_column(headers, CAMPAIGN_HEADERS) {
            Some(index) => index,
            None => return Err(IngestError::missing_columns(&["campaign name"], headers)),
        };
        let source = find_column(headers, SOURCE_HEADERS);
        let network = find_column(headers, NETWORK_HEADERS);

        let shape = if source.is_some() {
            CsvShape::Source
        } else if network.is_some() {
            CsvShape::Network
        } else {
            return Err(IngestError::missing_columns(&["source", "network"], headers));
        };

        Ok(Self {
            shape,
            campaign,
            source,
            network,
            rt_source: find_column(headers, RT_SOURCE_HEADERS),
            rt_campaign: find_column(headers, RT_CAMPAIGN_HEADERS),
        })
    }
}

/// First header matching the preference list, in list order.
fn find_column(headers: &[String], preferred: &[&str]) -> Option<usize> {
    for candidate in preferred {
        if let Some(index) = headers.iter().position(|header| header == candidate) {
            return Some(index);
        }
    }
    None
}
