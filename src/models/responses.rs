//! Response DTOs for the translation API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::cache::CacheStats;
use crate::translations::{Language, Provider, Translation};

/// Response body for `GET /translate/:section/:key`
#[derive(Debug, Clone, Serialize)]
pub struct TranslateResponse {
    /// The requested key
    pub key: String,
    pub section: String,
    /// Text to display (the key itself when `fallback` is set)
    pub text: String,
    pub language: Language,
    pub provider: Provider,
    pub cached: bool,
    pub fallback: bool,
}

impl TranslateResponse {
    pub fn new(
        key: impl Into<String>,
        section: impl Into<String>,
        translation: Translation,
    ) -> Self {
        Self {
            key: key.into(),
            section: section.into(),
            text: translation.text,
            language: translation.language,
            provider: translation.provider,
            cached: translation.cached,
            fallback: translation.fallback,
        }
    }
}

/// Response body for `GET /translations/:lang`
#[derive(Debug, Clone, Serialize)]
pub struct LanguageTranslationsResponse {
    pub language: Language,
    /// Section name -> nested label content
    pub sections: Map<String, Value>,
}

impl LanguageTranslationsResponse {
    pub fn new(language: Language, sections: Map<String, Value>) -> Self {
        Self { language, sections }
    }
}

/// Response body for `DELETE /cache`
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
    /// Number of entries dropped
    pub removed: usize,
}

impl ClearResponse {
    pub fn new(removed: usize) -> Self {
        Self {
            message: format!("Cleared {} cached translations", removed),
            removed,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Current number of cached translations
    pub size: usize,
    /// Cache bound
    pub max_size: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub expirations: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            size: stats.size,
            max_size: stats.max_size,
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expirations: stats.expirations,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
