//! Wire types for the growth index timeline endpoint (REST).

use crate::shared::ChainName;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// REST request body for `POST /growth-index/basic-timeline-data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRequest {
    pub chain_name: ChainName,
    pub period: String,
    pub metric: String,
    pub compare_with: Vec<ChainName>,
}

/// A single `{date, value}` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    #[serde(with = "crate::shared::serde_util::calendar_date")]
    pub date: NaiveDate,
    pub value: f64,
}

/// REST response: both series keyed by metric name.
///
/// ```json
/// {
///   "blockchain": { "tg_growth_index": [{ "date": "2023-05-01", "value": 41.2 }] },
///   "cumulative": { "tg_growth_index": [{ "date": "2023-05-01", "value": 55.0 }] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineResponse {
    pub blockchain: HashMap<String, Vec<TimelineEntry>>,
    pub cumulative: HashMap<String, Vec<TimelineEntry>>,
}
