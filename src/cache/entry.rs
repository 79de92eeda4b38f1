//! Cache Entry Module
//!
//! Defines a single cached translation and its freshness check.

use serde::Serialize;

use crate::translations::Provider;

// == Cache Entry ==
/// A resolved translation with the metadata needed for expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheEntry {
    /// The translated text
    pub value: String,
    /// Insertion timestamp (Unix milliseconds), never updated after creation
    pub inserted_at: u64,
    /// Provider that produced the value; informational only
    pub provider: Provider,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with `now_ms`.
    pub fn new(value: String, provider: Provider, now_ms: u64) -> Self {
        Self {
            value,
            inserted_at: now_ms,
            provider,
        }
    }

    // == Age ==
    /// Milliseconds elapsed since insertion. A clock that went backwards
    /// yields zero.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.inserted_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is stale at `now_ms`.
    ///
    /// Boundary condition: an entry whose age is exactly `expiry_ms` is still
    /// fresh; it expires only once the age is strictly greater.
    pub fn is_expired(&self, now_ms: u64, expiry_ms: u64) -> bool {
        self.age_ms(now_ms) > expiry_ms
    }

    // == Time To Live ==
    /// Remaining lifetime in milliseconds, `0` once expired.
    pub fn ttl_remaining_ms(&self, now_ms: u64, expiry_ms: u64) -> u64 {
        expiry_ms.saturating_sub(self.age_ms(now_ms))
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const DAY_MS: u64 = 86_400_000;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("Beranda".to_string(), Provider::Google, 1_000);

        assert_eq!(entry.value, "Beranda");
        assert_eq!(entry.inserted_at, 1_000);
        assert_eq!(entry.provider, Provider::Google);
    }

    #[test]
    fn test_entry_fresh_before_expiry() {
        let entry = CacheEntry::new("Home".to_string(), Provider::Openai, 0);
        assert!(!entry.is_expired(DAY_MS - 1, DAY_MS));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new("Home".to_string(), Provider::Google, 10);

        // Exactly at the expiry window the entry is still readable
        assert!(!entry.is_expired(10 + DAY_MS, DAY_MS));
        // One millisecond later it is stale
        assert!(entry.is_expired(10 + DAY_MS + 1, DAY_MS));
    }

    #[test]
    fn test_clock_going_backwards_is_fresh() {
        let entry = CacheEntry::new("Home".to_string(), Provider::Google, 5_000);

        assert_eq!(entry.age_ms(1_000), 0);
        assert!(!entry.is_expired(1_000, DAY_MS));
    }

    #[test]
    fn test_ttl_remaining() {
        let entry = CacheEntry::new("Cart".to_string(), Provider::Microsoft, 0);

        assert_eq!(entry.ttl_remaining_ms(1_000, DAY_MS), DAY_MS - 1_000);
        assert_eq!(entry.ttl_remaining_ms(DAY_MS * 2, DAY_MS), 0);
    }
}
