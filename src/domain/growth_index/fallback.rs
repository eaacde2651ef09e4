//! Bundled growth index snapshot, used when the timeline endpoint is unreachable.

use super::wire::TimelineResponse;
use super::{DatasetPair, TimelineQuery};
use crate::error::SdkError;

/// Raw snapshot: one year of weekly Ethereum vs. Ethereum & Solana growth index.
pub const BUNDLED_TIMELINE_JSON: &str = include_str!("../../../data/growth_index_fallback.json");

/// Parse the bundled snapshot into its wire form.
pub fn bundled_response() -> Result<TimelineResponse, SdkError> {
    Ok(serde_json::from_str(BUNDLED_TIMELINE_JSON)?)
}

/// The bundled snapshot as a dataset pair labelled for `query`.
///
/// The snapshot only carries `tg_growth_index`; any other metric is a
/// validation error.
pub fn bundled_dataset_pair(query: &TimelineQuery) -> Result<DatasetPair, SdkError> {
    bundled_response()?.into_dataset_pair(query)
}
