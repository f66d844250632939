//! Translation metrics and observability module.
//!
//! Each resolver owns one `TranslationMetrics`, so counters describe a single
//! session's cache and fallback activity.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for resolver activity.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Number of table requests served from the cache
    cache_hits: AtomicUsize,

    /// Number of table requests that had to go to the source
    cache_misses: AtomicUsize,

    /// Number of documents loaded from the source (including fallback loads)
    table_loads: AtomicUsize,

    /// Number of locales served from the default locale's table
    locale_fallbacks: AtomicUsize,

    /// Number of lookups that found no usable string
    missing_keys: AtomicUsize,

    /// Number of lookups made with an empty key
    empty_keys: AtomicUsize,
}

impl TranslationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_table_load(&self) {
        self.table_loads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_locale_fallback(&self) {
        self.locale_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_missing_key(&self) {
        self.missing_keys.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_empty_key(&self) {
        self.empty_keys.fetch_add(1, Ordering::Relaxed);
    }

    pub fn cache_hits(&self) -> usize {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn cache_misses(&self) -> usize {
        self.cache_misses.load(Ordering::Relaxed)
    }

    pub fn table_loads(&self) -> usize {
        self.table_loads.load(Ordering::Relaxed)
    }

    pub fn locale_fallbacks(&self) -> usize {
        self.locale_fallbacks.load(Ordering::Relaxed)
    }

    pub fn missing_keys(&self) -> usize {
        self.missing_keys.load(Ordering::Relaxed)
    }

    pub fn empty_keys(&self) -> usize {
        self.empty_keys.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.cache_hits();
        let misses = self.cache_misses();
        let total_cache_queries = hits + misses;
        let cache_hit_rate = if total_cache_queries > 0 {
            (hits as f64 / total_cache_queries as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            cache_hits: hits,
            cache_misses: misses,
            cache_hit_rate,
            table_loads: self.table_loads(),
            locale_fallbacks: self.locale_fallbacks(),
            missing_keys: self.missing_keys(),
            empty_keys: self.empty_keys(),
        }
    }
}

/// Snapshot of resolver statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub cache_hits: usize,
    pub cache_misses: usize,

    /// Cache hit rate as a percentage (0-100)
    pub cache_hit_rate: f64,

    pub table_loads: usize,
    pub locale_fallbacks: usize,
    pub missing_keys: usize,
    pub empty_keys: usize,
}
