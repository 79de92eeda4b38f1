//! Cache Store Module
//!
//! Translation cache combining HashMap storage with insertion-order eviction
//! and lazy expiry.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{
    CacheEntry, CacheStats, Clock, InsertionOrder, SystemClock, CACHE_EXPIRY_MS, MAX_CACHE_SIZE,
};
use crate::translations::Provider;

// == Translation Cache ==
/// Bounded, time-expiring store of resolved translations.
///
/// Every operation is total: a miss is reported as `None`, never as an error.
/// Expired entries are only removed when they are read.
#[derive(Debug)]
pub struct TranslationCache<C: Clock = SystemClock> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Eviction order (oldest insertion first)
    order: InsertionOrder,
    /// Activity counters
    stats: CacheStats,
    /// Maximum number of entries allowed
    max_entries: usize,
    /// Validity window in milliseconds
    expiry_ms: u64,
    clock: C,
}

impl TranslationCache<SystemClock> {
    // == Constructor ==
    /// Creates a cache with the given bound and expiry window on the system clock.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of entries (a bound of zero is treated as one)
    /// * `expiry_ms` - Milliseconds an entry stays readable after insertion
    pub fn new(max_entries: usize, expiry_ms: u64) -> Self {
        Self::with_clock(max_entries, expiry_ms, SystemClock)
    }
}

impl Default for TranslationCache<SystemClock> {
    fn default() -> Self {
        Self::new(MAX_CACHE_SIZE, CACHE_EXPIRY_MS)
    }
}

impl<C: Clock> TranslationCache<C> {
    /// Creates a cache that reads time from `clock`.
    pub fn with_clock(max_entries: usize, expiry_ms: u64, clock: C) -> Self {
        let max_entries = max_entries.max(1);
        Self {
            entries: HashMap::with_capacity(max_entries),
            order: InsertionOrder::with_capacity(max_entries),
            stats: CacheStats::new(max_entries),
            max_entries,
            expiry_ms,
            clock,
        }
    }

    // == Get ==
    /// Returns the cached value for `key` if present and fresh.
    ///
    /// A stale entry is removed as a side effect and reported as a miss.
    pub fn get(&mut self, key: &str) -> Option<String> {
        let now = self.clock.now_ms();

        let Some(entry) = self.entries.get(key) else {
            self.stats.record_miss();
            return None;
        };

        if entry.is_expired(now, self.expiry_ms) {
            debug!(key, age_ms = entry.age_ms(now), "Dropping expired translation");
            self.entries.remove(key);
            self.order.remove(key);
            self.stats.record_expiration();
            self.stats.record_miss();
            return None;
        }

        let value = entry.value.clone();
        self.stats.record_hit();
        Some(value)
    }

    // == Set ==
    /// Stores `value` under `key`.
    ///
    /// A new key arriving while the cache is full evicts the earliest-inserted
    /// entry first. Overwriting an existing key replaces its value, timestamp
    /// and provider but keeps its place in the eviction order.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>, provider: Provider) {
        let key = key.into();
        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.max_entries {
            if let Some(evicted) = self.order.pop_oldest() {
                debug!(key = %evicted, "Evicting oldest translation");
                self.entries.remove(&evicted);
                self.stats.record_eviction();
            }
        }

        let entry = CacheEntry::new(value.into(), provider, self.clock.now_ms());
        self.order.push_newest(&key);
        self.entries.insert(key, entry);
    }

    // == Clear ==
    /// Removes every entry. Activity counters are kept.
    ///
    /// Returns the number of entries dropped.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        self.order.clear();
        removed
    }

    // == Stats ==
    /// Returns a snapshot of size and activity counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_size(self.entries.len());
        stats
    }

    // == Peek ==
    /// Returns the raw entry without checking expiry or touching counters.
    pub fn peek(&self, key: &str) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    // == Keys ==
    /// Cached keys from oldest to newest insertion.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn expiry_ms(&self) -> u64 {
        self.expiry_ms
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;

    fn manual_cache(max_entries: usize) -> (TranslationCache<ManualClock>, ManualClock) {
        let clock = ManualClock::new(1_700_000_000_000);
        let cache = TranslationCache::with_clock(max_entries, CACHE_EXPIRY_MS, clock.clone());
        (cache, clock)
    }

    #[test]
    fn test_store_new() {
        let cache: TranslationCache = TranslationCache::default();
        assert!(cache.is_empty());
        assert_eq!(cache.max_entries(), MAX_CACHE_SIZE);
        assert_eq!(cache.expiry_ms(), CACHE_EXPIRY_MS);
    }

    #[test]
    fn test_store_set_and_get() {
        let mut cache: TranslationCache = TranslationCache::default();

        cache.set("home:id:common:google", "Beranda", Provider::Google);

        assert_eq!(cache.get("home:id:common:google").as_deref(), Some("Beranda"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_store_get_nonexistent() {
        let mut cache: TranslationCache = TranslationCache::default();

        assert_eq!(cache.get("missing"), None);
        assert_eq!(cache.stats().size, 0);
        assert_eq!(cache.stats().misses, 1);
    }

    #[test]
    fn test_store_overwrite() {
        let (mut cache, clock) = manual_cache(10);

        cache.set("k", "v1", Provider::Google);
        clock.advance(1_000);
        cache.set("k", "v2", Provider::Openai);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("k").as_deref(), Some("v2"));

        let entry = cache.peek("k").unwrap();
        assert_eq!(entry.provider, Provider::Openai);
        assert_eq!(entry.inserted_at, clock.now_ms());
    }

    #[test]
    fn test_store_expiry_scenario() {
        let (mut cache, clock) = manual_cache(MAX_CACHE_SIZE);

        cache.set("a.b:en:common:google", "Home", Provider::Google);
        cache.set("c.d:id:common:google", "Beranda", Provider::Google);

        let stats = cache.stats();
        assert_eq!(stats.size, 2);
        assert_eq!(stats.max_size, 1000);
        assert_eq!(cache.get("a.b:en:common:google").as_deref(), Some("Home"));

        clock.advance(86_400_001);

        assert_eq!(cache.get("a.b:en:common:google"), None);
        assert_eq!(cache.stats().size, 1);
        assert_eq!(cache.stats().expirations, 1);
    }

    #[test]
    fn test_store_readable_at_exact_expiry() {
        let (mut cache, clock) = manual_cache(10);

        cache.set("k", "v", Provider::Google);
        clock.advance(CACHE_EXPIRY_MS);

        assert_eq!(cache.get("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_store_expired_entry_leaves_eviction_order() {
        let (mut cache, clock) = manual_cache(2);

        cache.set("old", "1", Provider::Google);
        clock.advance(CACHE_EXPIRY_MS + 1);
        cache.set("b", "2", Provider::Google);

        // Lazily purge "old", then fill the freed slot
        assert_eq!(cache.get("old"), None);
        cache.set("c", "3", Provider::Google);

        assert_eq!(cache.keys().collect::<Vec<_>>(), vec!["b", "c"]);
        assert_eq!(cache.stats().evictions, 0);
    }

    #[test]
    fn test_store_eviction_scenario() {
        let mut cache: TranslationCache = TranslationCache::default();

        for i in 1..=1000 {
            cache.set(format!("key{i}"), format!("value{i}"), Provider::Google);
        }
        assert_eq!(cache.len(), 1000);

        cache.set("key1001", "value1001", Provider::Google);

        assert_eq!(cache.len(), 1000);
        assert_eq!(cache.get("key1"), None);
        assert_eq!(cache.get("key1000").as_deref(), Some("value1000"));
        assert_eq!(cache.get("key1001").as_deref(), Some("value1001"));
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn test_store_get_does_not_refresh_order() {
        let (mut cache, _clock) = manual_cache(3);

        cache.set("key1", "v", Provider::Google);
        cache.set("key2", "v", Provider::Google);
        cache.set("key3", "v", Provider::Google);

        cache.get("key1");
        cache.set("key4", "v", Provider::Google);

        assert_eq!(cache.get("key1"), None);
        assert!(cache.get("key2").is_some());
    }

    #[test]
    fn test_store_overwrite_keeps_eviction_position() {
        let (mut cache, _clock) = manual_cache(3);

        cache.set("key1", "v", Provider::Google);
        cache.set("key2", "v", Provider::Google);
        cache.set("key3", "v", Provider::Google);

        // Overwrite of a present key never evicts
        cache.set("key1", "updated", Provider::Microsoft);
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.stats().evictions, 0);

        // key1 is still the oldest insertion
        cache.set("key4", "v", Provider::Google);
        assert_eq!(cache.get("key1"), None);
        assert!(cache.get("key2").is_some());
    }

    #[test]
    fn test_store_clear() {
        let mut cache: TranslationCache = TranslationCache::default();
        cache.set("a", "1", Provider::Google);
        cache.set("b", "2", Provider::Google);

        assert_eq!(cache.clear(), 2);

        assert_eq!(cache.stats().size, 0);
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), None);
        assert_eq!(cache.keys().count(), 0);
    }

    #[test]
    fn test_store_zero_bound_holds_one_entry() {
        let mut cache = TranslationCache::new(0, CACHE_EXPIRY_MS);

        cache.set("a", "1", Provider::Google);
        cache.set("b", "2", Provider::Google);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("b").as_deref(), Some("2"));
    }

    #[test]
    fn test_store_stats() {
        let mut cache: TranslationCache = TranslationCache::default();

        cache.set("key1", "value1", Provider::Google);
        cache.get("key1");
        cache.get("nonexistent");

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.size, 1);
    }
}
