//! Backend performance counters for the admin dashboard.

use reqwest::Method;
use store::KeyValueStore;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{CacheMetrics, DbMetrics};

impl<S: KeyValueStore> ApiClient<S> {
    /// `GET /performance/db-metrics`. A missing `data` reads as no metrics.
    pub async fn db_metrics(&self) -> Result<DbMetrics, ApiError> {
        let metrics: Option<DbMetrics> = self
            .send(self.call(Method::GET, "/performance/db-metrics"))
            .await?;
        Ok(metrics.unwrap_or_default())
    }

    /// `GET /performance/cache-metrics`
    pub async fn cache_metrics(&self) -> Result<CacheMetrics, ApiError> {
        let metrics: Option<CacheMetrics> = self
            .send(self.call(Method::GET, "/performance/cache-metrics"))
            .await?;
        Ok(metrics.unwrap_or_default())
    }

    /// `DELETE /performance/clear-metrics`
    pub async fn clear_metrics(&self) -> Result<String, ApiError> {
        self.send_ack(self.call(Method::DELETE, "/performance/clear-metrics"))
            .await
    }
}
