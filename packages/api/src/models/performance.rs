use std::collections::BTreeMap;

use serde::Deserialize;

/// Query timings keyed by repository method.
pub type DbMetrics = BTreeMap<String, DbMetric>;

/// Hit and miss counters keyed by cache key.
pub type CacheMetrics = BTreeMap<String, CacheMetric>;

/// Timing summary for one query.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DbMetric {
    pub count: u64,
    pub avg_time: f64,
    pub min_time: f64,
    pub max_time: f64,
    pub total_time: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheMetric {
    #[serde(default)]
    pub hits: u64,
    #[serde(default)]
    pub misses: u64,
    #[serde(default)]
    pub hit_rate: Option<f64>,
}

impl CacheMetric {
    /// Percentage of lookups served from cache; computed when the backend
    /// leaves it out.
    pub fn hit_rate(&self) -> f64 {
        if let Some(rate) = self.hit_rate.filter(|r| r.is_finite()) {
            return rate;
        }
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 * 100.0 / lookups as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_metrics_from_backend_json() {
        let json = r#"{
            "findAll": {"count": 4, "avgTime": 12.5, "minTime": 3, "maxTime": 30, "totalTime": 50, "unit": "ms"},
            "findById": {"count": 1}
        }"#;
        let metrics: DbMetrics = serde_json::from_str(json).unwrap();
        let keys: Vec<_> = metrics.keys().map(String::as_str).collect();
        assert_eq!(keys, ["findAll", "findById"]);
        assert_eq!(metrics["findAll"].avg_time, 12.5);
        assert_eq!(metrics["findAll"].max_time, 30.0);
        assert_eq!(metrics["findById"].count, 1);
        assert_eq!(metrics["findById"].total_time, 0.0);
    }

    #[test]
    fn test_cache_hit_rate_falls_back_to_counts() {
        let metrics: CacheMetrics =
            serde_json::from_str(r#"{"products":{"hits":3,"misses":1},"cold":{},"given":{"hits":1,"misses":1,"hitRate":42.0}}"#)
                .unwrap();
        assert_eq!(metrics["products"].hit_rate(), 75.0);
        assert_eq!(metrics["cold"].hit_rate(), 0.0);
        assert_eq!(metrics["given"].hit_rate(), 42.0);
    }
}
