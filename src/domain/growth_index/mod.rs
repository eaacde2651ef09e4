//! Growth index domain — timeline queries, time series, the primary/secondary dataset pair.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod fallback;
pub mod wire;

use crate::shared::ChainName;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use fallback::bundled_dataset_pair;

/// Metric requested when none is configured.
pub const DEFAULT_METRIC: &str = "tg_growth_index";

/// Period requested when none is configured.
pub const DEFAULT_PERIOD: &str = "last year";

// ─── TimelineQuery ───────────────────────────────────────────────────────────

/// Parameters of a growth index timeline request.
///
/// `chain_name` drives the primary series; the secondary series is the
/// cumulative index of `chain_name` together with every `compare_with` chain.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineQuery {
    pub chain_name: ChainName,
    pub period: String,
    pub metric: String,
    pub compare_with: Vec<ChainName>,
}

impl Default for TimelineQuery {
    fn default() -> Self {
        Self {
            chain_name: ChainName::from("ethereum"),
            period: DEFAULT_PERIOD.to_string(),
            metric: DEFAULT_METRIC.to_string(),
            compare_with: vec![ChainName::from("solana")],
        }
    }
}

impl TimelineQuery {
    pub fn new(chain_name: impl Into<ChainName>) -> Self {
        Self {
            chain_name: chain_name.into(),
            compare_with: Vec::new(),
            ..Self::default()
        }
    }

    pub fn period(mut self, period: &str) -> Self {
        self.period = period.to_string();
        self
    }

    pub fn metric(mut self, metric: &str) -> Self {
        self.metric = metric.to_string();
        self
    }

    pub fn compare_with(mut self, chain: impl Into<ChainName>) -> Self {
        self.compare_with.push(chain.into());
        self
    }

    /// Legend label of the primary series, e.g. `"Ethereum"`.
    pub fn primary_label(&self) -> String {
        self.chain_name.display_name()
    }

    /// Legend label of the secondary series, e.g.
    /// `"Cumulative Data (Ethereum & Solana)"`.
    pub fn secondary_label(&self) -> String {
        let chains = std::iter::once(&self.chain_name)
            .chain(self.compare_with.iter())
            .map(ChainName::display_name)
            .collect::<Vec<_>>()
            .join(" & ");
        format!("Cumulative Data ({})", chains)
    }
}

// ─── Series ──────────────────────────────────────────────────────────────────

/// One sample of a growth index series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    #[serde(with = "crate::shared::serde_util::calendar_date")]
    pub date: NaiveDate,
    pub value: f64,
}

impl GrowthPoint {
    pub fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// A labelled series of growth points, ordered by date ascending.
///
/// Duplicate dates are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub label: String,
    pub points: Vec<GrowthPoint>,
}

impl TimeSeries {
    pub fn new(label: impl Into<String>, points: Vec<GrowthPoint>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.iter().map(|p| p.date)
    }
}

/// The two series a comparison chart always shows together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetPair {
    pub primary: TimeSeries,
    pub secondary: TimeSeries,
}

impl DatasetPair {
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty() && self.secondary.is_empty()
    }
}

// ─── Provenance ──────────────────────────────────────────────────────────────

/// Where a dataset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    /// Fresh response from the timeline endpoint.
    Remote,
    /// The snapshot bundled into the crate.
    Fallback,
}

/// A value tagged with its [`DataSource`].
#[derive(Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    pub source: DataSource,
    pub data: T,
}

impl<T> Sourced<T> {
    pub fn remote(data: T) -> Self {
        Self {
            source: DataSource::Remote,
            data,
        }
    }

    pub fn fallback(data: T) -> Self {
        Self {
            source: DataSource::Fallback,
            data,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == DataSource::Fallback
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}
