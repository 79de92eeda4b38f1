//! Resolver Module
//!
//! Turns `(key, section, options)` into display text: consults the cache,
//! falls back to the translation table, and as a last resort shows the key
//! itself so a missing label never breaks rendering.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

use crate::cache::{CacheStats, Clock, SystemClock, TranslationCache};
use crate::error::TranslationError;
use crate::translations::{
    Language, Preferences, PreferencesUpdate, Provider, TranslationOptions, TranslationTable,
};

/// Section used when the caller does not name one
pub const DEFAULT_SECTION: &str = "common";

// == Cache Key ==
/// Builds `<key>:<language>:<section>:<provider>`.
pub fn cache_key(key: &str, language: Language, section: &str, provider: Provider) -> String {
    format!("{key}:{}:{section}:{}", language.code(), provider.as_str())
}

// == Translation ==
/// Outcome of a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    /// Text to display
    pub text: String,
    pub language: Language,
    pub provider: Provider,
    /// Cache key used, when caching was requested
    pub cache_key: Option<String>,
    /// Served from the cache
    pub cached: bool,
    /// Lookup failed and `text` is the requested key
    pub fallback: bool,
}

// == Translator ==
/// Resolves labels for the current session.
///
/// Cloning is cheap; clones share the cache, table and preferences.
#[derive(Debug, Clone)]
pub struct Translator<C: Clock = SystemClock> {
    cache: Arc<RwLock<TranslationCache<C>>>,
    table: Arc<TranslationTable>,
    preferences: Arc<RwLock<Preferences>>,
}

impl<C: Clock> Translator<C> {
    pub fn new(
        cache: TranslationCache<C>,
        table: TranslationTable,
        preferences: Preferences,
    ) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            table: Arc::new(table),
            preferences: Arc::new(RwLock::new(preferences)),
        }
    }

    // == t ==
    /// Translates `key` into the session language and returns the text only.
    pub async fn t(&self, key: &str, section: &str, options: TranslationOptions) -> String {
        self.translate(key, section, options).await.text
    }

    // == Translate ==
    /// Translates `key` into the session language.
    pub async fn translate(
        &self,
        key: &str,
        section: &str,
        options: TranslationOptions,
    ) -> Translation {
        let prefs = self.preferences().await;
        self.resolve(prefs.language, prefs.provider, key, section, options)
            .await
    }

    // == Translate In ==
    /// Translates `key` into an explicit `language`.
    pub async fn translate_in(
        &self,
        language: Language,
        key: &str,
        section: &str,
        options: TranslationOptions,
    ) -> Translation {
        let provider = self.preferences.read().await.provider;
        self.resolve(language, provider, key, section, options).await
    }

    /// Cache, then table, then the key itself. Never fails: a lookup error
    /// yields the key as text with `fallback` set.
    ///
    /// Entries are keyed and attributed to the session `provider`;
    /// `options.provider` does not take part in resolution.
    async fn resolve(
        &self,
        language: Language,
        provider: Provider,
        key: &str,
        section: &str,
        options: TranslationOptions,
    ) -> Translation {
        let cache_key = options
            .cache_enabled()
            .then(|| cache_key(key, language, section, provider));

        if let Some(ck) = &cache_key {
            if let Some(text) = self.cache.write().await.get(ck) {
                debug!(cache_key = %ck, "Translation cache hit");
                return Translation {
                    text,
                    language,
                    provider,
                    cache_key,
                    cached: true,
                    fallback: false,
                };
            }
        }

        match self.table.lookup(section, language, key) {
            Ok(text) => {
                if let Some(ck) = &cache_key {
                    self.cache.write().await.set(ck.clone(), text.clone(), provider);
                }
                Translation {
                    text,
                    language,
                    provider,
                    cache_key,
                    cached: false,
                    fallback: false,
                }
            }
            Err(e @ TranslationError::NotFound(_)) => {
                warn!(section, language = %language, "Translation Error: {e}");
                Self::fallback(key, language, provider, cache_key)
            }
            Err(e) => {
                error!("Unexpected translation error: {e}");
                Self::fallback(key, language, provider, cache_key)
            }
        }
    }

    fn fallback(
        key: &str,
        language: Language,
        provider: Provider,
        cache_key: Option<String>,
    ) -> Translation {
        Translation {
            text: key.to_string(),
            language,
            provider,
            cache_key,
            cached: false,
            fallback: true,
        }
    }

    // == Preferences ==
    pub async fn preferences(&self) -> Preferences {
        *self.preferences.read().await
    }

    pub async fn set_language(&self, language: Language) {
        self.preferences.write().await.set_language(language);
    }

    pub async fn set_provider(&self, provider: Provider) {
        self.preferences.write().await.set_provider(provider);
    }

    /// Applies a partial update and returns the resulting preferences.
    pub async fn update_preferences(&self, update: PreferencesUpdate) -> Preferences {
        let mut prefs = self.preferences.write().await;
        prefs.apply(update);
        *prefs
    }

    // == Cache Access ==
    /// Drops every cached translation, returning how many were removed.
    pub async fn clear_cache(&self) -> usize {
        self.cache.write().await.clear()
    }

    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    /// Shared handle to the underlying cache.
    pub fn cache(&self) -> &Arc<RwLock<TranslationCache<C>>> {
        &self.cache
    }

    pub fn table(&self) -> &TranslationTable {
        &self.table
    }
}
