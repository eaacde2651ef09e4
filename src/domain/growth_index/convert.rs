//! Conversions between wire types and domain types for the growth index.

use super::wire::{TimelineEntry, TimelineRequest, TimelineResponse};
use super::{DatasetPair, GrowthPoint, TimeSeries, TimelineQuery};
use crate::error::SdkError;
use std::collections::HashMap;

impl From<&TimelineQuery> for TimelineRequest {
    fn from(q: &TimelineQuery) -> Self {
        Self {
            chain_name: q.chain_name.clone(),
            period: q.period.clone(),
            metric: q.metric.clone(),
            compare_with: q.compare_with.clone(),
        }
    }
}

impl From<TimelineEntry> for GrowthPoint {
    fn from(e: TimelineEntry) -> Self {
        Self {
            date: e.date,
            value: e.value,
        }
    }
}

impl TimelineResponse {
    /// Extract the query's metric from both halves of the response.
    ///
    /// Points are stably sorted by date so the series keep their ascending
    /// order even if the backend interleaves them; duplicates survive.
    pub fn into_dataset_pair(mut self, query: &TimelineQuery) -> Result<DatasetPair, SdkError> {
        let primary = take_series(&mut self.blockchain, "blockchain", query, query.primary_label())?;
        let secondary =
            take_series(&mut self.cumulative, "cumulative", query, query.secondary_label())?;
        Ok(DatasetPair { primary, secondary })
    }
}

fn take_series(
    section: &mut HashMap<String, Vec<TimelineEntry>>,
    section_name: &str,
    query: &TimelineQuery,
    label: String,
) -> Result<TimeSeries, SdkError> {
    let entries = section.remove(&query.metric).ok_or_else(|| {
        SdkError::Validation(format!(
            "response section '{}' has no metric '{}'",
            section_name, query.metric
        ))
    })?;

    let mut points: Vec<GrowthPoint> = entries.into_iter().map(GrowthPoint::from).collect();
    if points.windows(2).any(|w| w[0].date > w[1].date) {
        tracing::debug!(section = section_name, "Sorting out-of-order timeline entries");
        points.sort_by_key(|p| p.date);
    }

    Ok(TimeSeries::new(label, points))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn sample_response() -> TimelineResponse {
        serde_json::from_str(
            r#"{
                "blockchain": { "tg_growth_index": [
                    { "date": "2024-01-01", "value": 10.0 },
                    { "date": "2024-01-08", "value": 12.5 }
                ]},
                "cumulative": { "tg_growth_index": [
                    { "date": "2024-01-01T00:00:00.000Z", "value": 20 },
                    { "date": "2024-01-08T00:00:00.000Z", "value": 21.5 },
                    { "date": "2024-01-15T00:00:00.000Z", "value": 23 }
                ]}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_query_to_request_body() {
        let body = TimelineRequest::from(&TimelineQuery::default());
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "chainName": "ethereum",
                "period": "last year",
                "metric": "tg_growth_index",
                "compareWith": ["solana"],
            })
        );
    }

    #[test]
    fn test_response_conversion() {
        let pair = sample_response()
            .into_dataset_pair(&TimelineQuery::default())
            .unwrap();
        assert_eq!(pair.primary.label, "Ethereum");
        assert_eq!(pair.primary.len(), 2);
        assert_eq!(pair.primary.points[1], GrowthPoint::new(date(8), 12.5));
        assert_eq!(pair.secondary.label, "Cumulative Data (Ethereum & Solana)");
        assert_eq!(pair.secondary.len(), 3);
        assert_eq!(pair.secondary.points[2], GrowthPoint::new(date(15), 23.0));
    }

    #[test]
    fn test_missing_metric_is_validation_error() {
        let query = TimelineQuery::default().metric("tg_user_index");
        let err = sample_response().into_dataset_pair(&query).unwrap_err();
        assert!(matches!(err, SdkError::Validation(msg) if msg.contains("tg_user_index")));
    }

    #[test]
    fn test_out_of_order_entries_are_sorted_keeping_duplicates() {
        let resp: TimelineResponse = serde_json::from_str(
            r#"{
                "blockchain": { "tg_growth_index": [
                    { "date": "2024-01-08", "value": 2 },
                    { "date": "2024-01-01", "value": 1 },
                    { "date": "2024-01-08", "value": 3 }
                ]},
                "cumulative": { "tg_growth_index": [] }
            }"#,
        )
        .unwrap();
        let pair = resp.into_dataset_pair(&TimelineQuery::default()).unwrap();
        let values: Vec<f64> = pair.primary.points.iter().map(|p| p.value).collect();
        assert_eq!(values, [1.0, 2.0, 3.0]);
        assert!(pair.secondary.is_empty());
    }
}
