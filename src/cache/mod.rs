//! Cache Module
//!
//! In-memory translation cache with lazy expiry and oldest-insertion eviction.

mod clock;
mod entry;
mod order;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use order::InsertionOrder;
pub use stats::CacheStats;
pub use store::TranslationCache;

// == Public Constants ==
/// Milliseconds a cached translation stays valid (24 hours)
pub const CACHE_EXPIRY_MS: u64 = 24 * 60 * 60 * 1000;

/// Maximum number of cached translations
pub const MAX_CACHE_SIZE: usize = 1000;
