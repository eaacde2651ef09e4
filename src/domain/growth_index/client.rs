//! Growth index sub-client — timeline fetch with bundled fallback.

use super::fallback::bundled_dataset_pair;
use super::wire::TimelineRequest;
use super::{DatasetPair, Sourced};
use crate::client::GrowthChartClient;
use crate::error::SdkError;

/// Sub-client for growth index operations.
pub struct GrowthIndex<'a> {
    pub(crate) client: &'a GrowthChartClient,
}

impl<'a> GrowthIndex<'a> {
    /// Fetch the dataset pair, falling back to the bundled snapshot on any
    /// remote failure. Callers cannot tell the two apart.
    pub async fn fetch_dataset_pair(&self) -> Result<DatasetPair, SdkError> {
        Ok(self.fetch_dataset_pair_tagged().await?.into_inner())
    }

    /// Like [`fetch_dataset_pair`](Self::fetch_dataset_pair), but reports
    /// whether the data is remote-fresh or the bundled fallback.
    ///
    /// The first result is cached on the client; later calls return it
    /// without touching the network until [`refresh`](Self::refresh).
    /// Concurrent first calls share a single request.
    pub async fn fetch_dataset_pair_tagged(&self) -> Result<Sourced<DatasetPair>, SdkError> {
        if let Some(cached) = self.client.dataset_cache.read().await.as_ref() {
            return Ok(cached.clone());
        }

        // Held across the fetch so overlapping callers wait for this result.
        let mut cache = self.client.dataset_cache.write().await;
        if let Some(cached) = cache.as_ref() {
            return Ok(cached.clone());
        }

        let sourced = match self.fetch_remote().await {
            Ok(pair) => {
                tracing::info!(
                    primary = pair.primary.len(),
                    secondary = pair.secondary.len(),
                    "Fetched growth index timeline"
                );
                Sourced::remote(pair)
            }
            Err(e) if self.client.fallback_enabled => {
                tracing::warn!(error = %e, "Timeline fetch failed, using bundled snapshot");
                Sourced::fallback(bundled_dataset_pair(&self.client.query)?)
            }
            Err(e) => return Err(e),
        };

        *cache = Some(sourced.clone());
        Ok(sourced)
    }

    /// Fetch from the timeline endpoint only; errors are returned untouched.
    pub async fn fetch_remote(&self) -> Result<DatasetPair, SdkError> {
        let query = &self.client.query;
        let body = TimelineRequest::from(query);
        let resp = self
            .client
            .http
            .post_timeline(&body, self.client.retry_policy.clone())
            .await?;
        resp.into_dataset_pair(query)
    }

    /// The cached dataset, if one has been fetched.
    pub async fn cached(&self) -> Option<Sourced<DatasetPair>> {
        self.client.dataset_cache.read().await.clone()
    }

    /// Drop the cached dataset so the next fetch goes to the network again.
    pub async fn refresh(&self) {
        *self.client.dataset_cache.write().await = None;
    }
}
