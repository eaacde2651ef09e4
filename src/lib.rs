//! # Growth Chart SDK
//!
//! Fetches a two-series growth index timeline (with a bundled fallback), resamples
//! it by index stride and describes a comparison chart in line, bar or dual-axis
//! mode, ready to hand to Chart.js.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, the chart presenter, bundled data
//! 2. **HTTP API** — `GrowthIndexHttp` with per-request retry policies
//! 3. **High-Level Client** — `GrowthChartClient` with nested sub-clients and caching
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use growth_chart_sdk::prelude::*;
//!
//! let client = GrowthChartClient::builder().build()?;
//! let pair = client.growth_index().fetch_dataset_pair().await?;
//!
//! let mut chart = ChartState::new();
//! chart.set_dataset(pair);
//! let config = chart.set_mode(ChartMode::DualAxisLine).map(|d| d.to_chartjs());
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `GrowthChartClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{ChainName, ChartMode, Granularity};

    // Domain types — growth index
    pub use crate::domain::growth_index::{
        bundled_dataset_pair, DataSource, DatasetPair, GrowthPoint, Sourced, TimeSeries,
        TimelineQuery,
    };

    // Domain types — chart
    pub use crate::domain::chart::chartjs::ChartJsConfig;
    pub use crate::domain::chart::{
        describe, downsample, AxisId, ChartDescription, ChartState, SeriesDescriptor, SeriesKind,
        Theme, ValueAxis,
    };

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{GrowthChartClient, GrowthChartClientBuilder, GrowthIndexClient};
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
