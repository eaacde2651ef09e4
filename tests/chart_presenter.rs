//! Integration tests for the chart presenter through the public API.
//!
//! Runs entirely offline against the bundled snapshot and synthetic series.

use chrono::{Duration, NaiveDate};
use growth_chart_sdk::prelude::*;

fn weekly(label: &str, len: usize) -> TimeSeries {
    let start = NaiveDate::from_ymd_opt(2023, 9, 4).unwrap();
    TimeSeries::new(
        label,
        (0..len)
            .map(|i| GrowthPoint::new(start + Duration::weeks(i as i64), 40.0 + i as f64 * 0.5))
            .collect(),
    )
}

// =============================================================================
// Resampling properties
// =============================================================================

mod resampling {
    use super::*;

    #[test]
    fn test_downsampled_length_and_elements() {
        for len in [0usize, 1, 2, 3, 7, 8, 53] {
            let series = weekly("s", len);
            for g in Granularity::options() {
                let out = series.downsampled(g);
                assert_eq!(out.len(), len.div_ceil(g.get()));
                for (i, point) in out.points.iter().enumerate() {
                    assert_eq!(*point, series.points[i * g.get()]);
                }
            }
        }
    }

    #[test]
    fn test_granularity_one_is_identity() {
        let pair = bundled_dataset_pair(&TimelineQuery::default()).unwrap();
        assert_eq!(pair.primary.downsampled(Granularity::ONE), pair.primary);
        assert_eq!(downsample(&pair.secondary.points, Granularity::ONE), pair.secondary.points);
    }

    #[test]
    fn test_eight_weekly_points_at_two_weeks() {
        let primary = weekly("Ethereum", 8);
        let secondary = weekly("Cumulative", 8);
        let desc = describe(&primary, &secondary, Granularity::TWO, ChartMode::Line);

        assert_eq!(desc.labels.len(), 4);
        for (label, idx) in desc.labels.iter().zip([0, 2, 4, 6]) {
            assert_eq!(*label, primary.points[idx].date);
        }
    }
}

// =============================================================================
// Modes
// =============================================================================

mod modes {
    use super::*;

    #[test]
    fn test_axis_descriptor_counts() {
        let pair = bundled_dataset_pair(&TimelineQuery::default()).unwrap();
        for g in Granularity::options() {
            let line = describe(&pair.primary, &pair.secondary, g, ChartMode::Line);
            let bar = describe(&pair.primary, &pair.secondary, g, ChartMode::Bar);
            let dual = describe(&pair.primary, &pair.secondary, g, ChartMode::DualAxisLine);
            assert_eq!(line.y_axes.len(), 1);
            assert_eq!(bar.y_axes.len(), 1);
            assert_eq!(dual.y_axes.len(), 2);
        }
    }

    #[test]
    fn test_mode_switch_keeps_labels() {
        let pair = bundled_dataset_pair(&TimelineQuery::default()).unwrap();
        let mut state = ChartState::new();
        state.set_dataset(pair);
        state.set_granularity(Granularity::FOUR);

        let before = state.description().unwrap().labels.clone();
        for mode in ChartMode::ALL {
            let desc = state.set_mode(mode).unwrap();
            assert_eq!(desc.labels, before);
        }
    }

    #[test]
    fn test_bundled_snapshot_series_labels() {
        let pair = bundled_dataset_pair(&TimelineQuery::default()).unwrap();
        let desc = describe(&pair.primary, &pair.secondary, Granularity::ONE, ChartMode::Bar);
        let labels: Vec<_> = desc.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Ethereum", "Cumulative Data (Ethereum & Solana)"]);
        assert!(desc.series.iter().all(|s| s.kind == SeriesKind::Bar));
    }
}

// =============================================================================
// Chart.js output
// =============================================================================

mod chartjs {
    use super::*;

    #[test]
    fn test_config_round_trips_through_json_text() {
        let pair = bundled_dataset_pair(&TimelineQuery::default()).unwrap();
        let mut state = ChartState::new();
        state.set_dataset(pair);
        let config = state
            .set_mode(ChartMode::DualAxisLine)
            .map(|d| d.to_chartjs())
            .unwrap();

        let text = config.to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["type"], "line");
        assert_eq!(value["data"]["labels"].as_array().unwrap().len(), 53);
        assert_eq!(value["data"]["datasets"][1]["yAxisID"], "y2");
        assert_eq!(value["options"]["scales"]["y2"]["position"], "right");
    }
}
