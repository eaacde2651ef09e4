//! Chart state container — app-owned, SDK-provided update logic.

use super::presenter::describe_with_theme;
use super::theme::Theme;
use super::ChartDescription;
use crate::domain::growth_index::DatasetPair;
use crate::shared::{ChartMode, Granularity};

/// The inputs of one comparison chart and the description derived from them.
///
/// The hosting view owns an instance; every setter recomputes the cached
/// description. Until a dataset arrives there is nothing to describe.
#[derive(Debug, Clone, Default)]
pub struct ChartState {
    granularity: Granularity,
    mode: ChartMode,
    dataset: Option<DatasetPair>,
    theme: Theme,
    description: Option<ChartDescription>,
}

impl ChartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn mode(&self) -> ChartMode {
        self.mode
    }

    pub fn dataset(&self) -> Option<&DatasetPair> {
        self.dataset.as_ref()
    }

    /// The current description, `None` while the dataset is pending.
    pub fn description(&self) -> Option<&ChartDescription> {
        self.description.as_ref()
    }

    pub fn set_granularity(&mut self, granularity: Granularity) -> Option<&ChartDescription> {
        self.granularity = granularity;
        self.recompute()
    }

    pub fn set_mode(&mut self, mode: ChartMode) -> Option<&ChartDescription> {
        self.mode = mode;
        self.recompute()
    }

    /// Install the dataset once the provider resolves.
    pub fn set_dataset(&mut self, dataset: DatasetPair) -> Option<&ChartDescription> {
        self.dataset = Some(dataset);
        self.recompute()
    }

    fn recompute(&mut self) -> Option<&ChartDescription> {
        self.description = self.dataset.as_ref().map(|pair| {
            describe_with_theme(
                &pair.primary,
                &pair.secondary,
                self.granularity,
                self.mode,
                &self.theme,
            )
        });
        self.description.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::growth_index::{GrowthPoint, TimeSeries};
    use chrono::{Duration, NaiveDate};

    fn pair(n: usize) -> DatasetPair {
        let start = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let series = |label: &str, base: f64| {
            TimeSeries::new(
                label,
                (0..n)
                    .map(|i| GrowthPoint::new(start + Duration::weeks(i as i64), base + i as f64))
                    .collect(),
            )
        };
        DatasetPair {
            primary: series("Ethereum", 0.0),
            secondary: series("Cumulative", 50.0),
        }
    }

    #[test]
    fn test_defaults() {
        let state = ChartState::new();
        assert_eq!(state.granularity(), Granularity::ONE);
        assert_eq!(state.mode(), ChartMode::Line);
        assert!(state.dataset().is_none());
        assert!(state.description().is_none());
    }

    #[test]
    fn test_changes_before_dataset_describe_nothing() {
        let mut state = ChartState::new();
        assert!(state.set_mode(ChartMode::Bar).is_none());
        assert!(state.set_granularity(Granularity::FOUR).is_none());
        assert!(state.description().is_none());
    }

    #[test]
    fn test_dataset_arrival_uses_pending_choices() {
        let mut state = ChartState::new();
        state.set_granularity(Granularity::TWO);
        state.set_mode(ChartMode::DualAxisLine);
        let desc = state.set_dataset(pair(8)).unwrap();
        assert_eq!(desc.labels.len(), 4);
        assert_eq!(desc.y_axes.len(), 2);
    }

    #[test]
    fn test_each_change_recomputes() {
        let mut state = ChartState::new();
        state.set_dataset(pair(8));
        assert_eq!(state.description().unwrap().labels.len(), 8);

        state.set_granularity(Granularity::FOUR);
        assert_eq!(state.description().unwrap().labels.len(), 2);

        let labels_before = state.description().unwrap().labels.clone();
        let desc = state.set_mode(ChartMode::Bar).unwrap();
        assert_eq!(desc.mode, ChartMode::Bar);
        assert_eq!(desc.labels, labels_before);
    }
}
