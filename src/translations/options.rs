//! Options Module
//!
//! Per-lookup translation options. The timeout window is checked whenever
//! options are built or deserialized, so an out-of-range instance never
//! exists.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TranslationError};
use crate::translations::Provider;

/// Smallest accepted provider timeout in milliseconds
pub const MIN_TIMEOUT_MS: u64 = 1_000;

/// Largest accepted provider timeout in milliseconds
pub const MAX_TIMEOUT_MS: u64 = 30_000;

// == Translation Options ==
/// Options accepted by a single lookup. Every field is optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawOptions")]
pub struct TranslationOptions {
    /// Provider requested by the caller; resolution still runs under the
    /// session provider
    pub provider: Option<Provider>,
    /// Read and write the translation cache
    pub cache: Option<bool>,
    /// Request source-language detection
    pub detect: Option<bool>,
    /// Allow the provider to batch this request
    pub batch: Option<bool>,
    /// Provider timeout in milliseconds
    timeout: Option<u64>,
}

/// Unchecked wire shape, validated on the way into [`TranslationOptions`].
#[derive(Debug, Deserialize)]
struct RawOptions {
    #[serde(default)]
    provider: Option<Provider>,
    #[serde(default)]
    cache: Option<bool>,
    #[serde(default)]
    detect: Option<bool>,
    #[serde(default)]
    batch: Option<bool>,
    #[serde(default)]
    timeout: Option<u64>,
}

impl TryFrom<RawOptions> for TranslationOptions {
    type Error = TranslationError;

    fn try_from(raw: RawOptions) -> Result<Self> {
        Self::new(raw.provider, raw.cache, raw.detect, raw.batch, raw.timeout)
    }
}

impl TranslationOptions {
    /// Builds options from loose fields, rejecting an out-of-range timeout.
    pub fn new(
        provider: Option<Provider>,
        cache: Option<bool>,
        detect: Option<bool>,
        batch: Option<bool>,
        timeout: Option<u64>,
    ) -> Result<Self> {
        let options = Self {
            provider,
            cache,
            detect,
            batch,
            timeout: None,
        };
        match timeout {
            Some(timeout_ms) => options.with_timeout(timeout_ms),
            None => Ok(options),
        }
    }

    /// Options with caching switched on.
    pub fn cached() -> Self {
        Self {
            cache: Some(true),
            ..Self::default()
        }
    }

    pub fn with_provider(mut self, provider: Provider) -> Self {
        self.provider = Some(provider);
        self
    }

    // == Timeout ==
    /// Sets the timeout. Out-of-range values are rejected, never clamped.
    pub fn with_timeout(mut self, timeout_ms: u64) -> Result<Self> {
        if !(MIN_TIMEOUT_MS..=MAX_TIMEOUT_MS).contains(&timeout_ms) {
            return Err(TranslationError::InvalidOptions(format!(
                "timeout must be between {MIN_TIMEOUT_MS} and {MAX_TIMEOUT_MS} ms, got {timeout_ms}"
            )));
        }
        self.timeout = Some(timeout_ms);
        Ok(self)
    }

    pub fn timeout(&self) -> Option<u64> {
        self.timeout
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.unwrap_or(false)
    }
}
