//! Cache Statistics Module
//!
//! Size snapshot plus hit, miss, eviction and expiration counters.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of the cache's occupancy and activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Current number of entries
    pub size: usize,
    /// Maximum number of entries before eviction
    pub max_size: usize,
    /// Reads that returned a fresh value
    pub hits: u64,
    /// Reads that found nothing or an expired entry
    pub misses: u64,
    /// Entries removed to stay within `max_size`
    pub evictions: u64,
    /// Entries removed lazily because they outlived the expiry window
    pub expirations: u64,
}

impl CacheStats {
    // == Constructor ==
    /// Creates zeroed stats for a cache bounded at `max_size`.
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            ..Self::default()
        }
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if nothing has been read yet.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    pub fn set_size(&mut self, size: usize) {
        self.size = size;
    }
}
