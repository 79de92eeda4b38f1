//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::cache::{CACHE_EXPIRY_MS, MAX_CACHE_SIZE};
use crate::error::{Result, TranslationError};
use crate::translations::{Language, Provider};

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of cached translations
    pub max_entries: usize,
    /// Milliseconds a cached translation stays valid
    pub cache_expiry_ms: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Session language at startup
    pub default_language: Language,
    /// Session provider at startup
    pub default_provider: Provider,
    /// JSON file of translation rows; built-in content is used when unset
    pub translations_path: Option<PathBuf>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_ENTRIES` - Maximum cached translations (default: 1000)
    /// - `CACHE_EXPIRY_MS` - Cache validity window in ms (default: 86400000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `DEFAULT_LANGUAGE` - `id` or `en` (default: id)
    /// - `DEFAULT_PROVIDER` - `google`, `microsoft` or `openai` (default: google)
    /// - `TRANSLATIONS_PATH` - Optional translation rows file
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_entries: parse_var("MAX_ENTRIES").unwrap_or(defaults.max_entries),
            cache_expiry_ms: parse_var("CACHE_EXPIRY_MS").unwrap_or(defaults.cache_expiry_ms),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            default_language: parse_var("DEFAULT_LANGUAGE").unwrap_or(defaults.default_language),
            default_provider: parse_var("DEFAULT_PROVIDER").unwrap_or(defaults.default_provider),
            translations_path: env::var("TRANSLATIONS_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Rejects settings the cache cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.max_entries == 0 {
            return Err(TranslationError::Config(
                "MAX_ENTRIES must be at least 1".to_string(),
            ));
        }
        if self.cache_expiry_ms == 0 {
            return Err(TranslationError::Config(
                "CACHE_EXPIRY_MS must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: MAX_CACHE_SIZE,
            cache_expiry_ms: CACHE_EXPIRY_MS,
            server_port: 3000,
            default_language: Language::default(),
            default_provider: Provider::default(),
            translations_path: None,
        }
    }
}

// Unset or unparseable values read as None.
fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_entries, 1000);
        assert_eq!(config.cache_expiry_ms, 86_400_000);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.default_language, Language::Id);
        assert_eq!(config.default_provider, Provider::Google);
        assert!(config.translations_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the environment to avoid races between tests
        for name in [
            "MAX_ENTRIES",
            "CACHE_EXPIRY_MS",
            "SERVER_PORT",
            "DEFAULT_LANGUAGE",
            "DEFAULT_PROVIDER",
            "TRANSLATIONS_PATH",
        ] {
            env::remove_var(name);
        }

        let config = Config::from_env();
        assert_eq!(config.max_entries, 1000);
        assert_eq!(config.cache_expiry_ms, 86_400_000);
        assert_eq!(config.default_language, Language::Id);

        env::set_var("MAX_ENTRIES", "25");
        env::set_var("DEFAULT_LANGUAGE", "en");
        env::set_var("DEFAULT_PROVIDER", "deepl");
        env::set_var("TRANSLATIONS_PATH", "/srv/translations.json");

        let config = Config::from_env();
        assert_eq!(config.max_entries, 25);
        assert_eq!(config.default_language, Language::En);
        // Unknown provider falls back to the default
        assert_eq!(config.default_provider, Provider::Google);
        assert_eq!(
            config.translations_path,
            Some(PathBuf::from("/srv/translations.json"))
        );

        for name in [
            "MAX_ENTRIES",
            "DEFAULT_LANGUAGE",
            "DEFAULT_PROVIDER",
            "TRANSLATIONS_PATH",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    fn test_config_validate_rejects_zero() {
        let config = Config {
            max_entries: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(TranslationError::Config(_))));

        let config = Config {
            cache_expiry_ms: 0,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
