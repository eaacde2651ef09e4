//! High-level client — `GrowthChartClient` with nested sub-client accessors.
//!
//! Each domain that talks to the network has its own sub-client in
//! `domain/<name>/client.rs`. This module keeps the builder, shared cache
//! state, and accessor methods.

use crate::domain::growth_index::client::GrowthIndex;
use crate::domain::growth_index::{DatasetPair, Sourced, TimelineQuery};
use crate::error::SdkError;
use crate::http::{GrowthIndexHttp, RetryPolicy};

use async_lock::RwLock;
use std::sync::Arc;

// Re-export sub-client types for convenience.
pub use crate::domain::growth_index::client::GrowthIndex as GrowthIndexClient;

/// The primary entry point for fetching chart data.
///
/// Clones share the dataset cache.
#[derive(Clone)]
pub struct GrowthChartClient {
    pub(crate) http: GrowthIndexHttp,
    pub(crate) query: TimelineQuery,
    pub(crate) retry_policy: RetryPolicy,
    pub(crate) fallback_enabled: bool,
    /// The dataset pair fetched so far, with its provenance.
    pub(crate) dataset_cache: Arc<RwLock<Option<Sourced<DatasetPair>>>>,
}

impl GrowthChartClient {
    pub fn builder() -> GrowthChartClientBuilder {
        GrowthChartClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn growth_index(&self) -> GrowthIndex<'_> {
        GrowthIndex { client: self }
    }

    pub fn query(&self) -> &TimelineQuery {
        &self.query
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct GrowthChartClientBuilder {
    base_url: String,
    query: TimelineQuery,
    retry_policy: RetryPolicy,
    fallback_enabled: bool,
}

impl Default for GrowthChartClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            query: TimelineQuery::default(),
            retry_policy: RetryPolicy::ReadOnly,
            fallback_enabled: true,
        }
    }
}

impl GrowthChartClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn query(mut self, query: TimelineQuery) -> Self {
        self.query = query;
        self
    }

    pub fn retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Whether remote failures are replaced by the bundled snapshot (default `true`).
    pub fn fallback(mut self, enabled: bool) -> Self {
        self.fallback_enabled = enabled;
        self
    }

    pub fn build(self) -> Result<GrowthChartClient, SdkError> {
        Ok(GrowthChartClient {
            http: GrowthIndexHttp::new(&self.base_url)?,
            query: self.query,
            retry_policy: self.retry_policy,
            fallback_enabled: self.fallback_enabled,
            dataset_cache: Arc::new(RwLock::new(None)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = GrowthChartClient::builder().build().unwrap();
        assert_eq!(client.base_url(), crate::network::DEFAULT_API_URL);
        assert_eq!(client.query(), &TimelineQuery::default());
        assert!(client.fallback_enabled);
        assert!(matches!(client.retry_policy, RetryPolicy::ReadOnly));
    }

    #[test]
    fn test_builder_overrides() {
        let client = GrowthChartClient::builder()
            .base_url("http://localhost:8080/")
            .query(TimelineQuery::new("polygon"))
            .retry_policy(RetryPolicy::None)
            .fallback(false)
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.query().chain_name.as_str(), "polygon");
        assert!(!client.fallback_enabled);
    }
}
