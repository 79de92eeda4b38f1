//! Request DTOs for the translation API
//!
//! Defines the structure of incoming query strings and request bodies.

use serde::Deserialize;

use crate::error::Result;
use crate::translations::{Language, Provider, TranslationOptions};

/// Query string for `GET /translate/:section/:key`
///
/// # Fields
/// - `lang`: Target language; the session language when absent
/// - remaining fields map one-to-one onto [`TranslationOptions`]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslateQuery {
    #[serde(default)]
    pub lang: Option<Language>,
    #[serde(default)]
    pub provider: Option<Provider>,
    #[serde(default)]
    pub cache: Option<bool>,
    #[serde(default)]
    pub detect: Option<bool>,
    #[serde(default)]
    pub batch: Option<bool>,
    #[serde(default)]
    pub timeout: Option<u64>,
}

impl TranslateQuery {
    /// Builds the lookup options, leaving `lang` aside.
    ///
    /// Fails with `InvalidOptions` when `timeout` is out of range.
    pub fn options(&self) -> Result<TranslationOptions> {
        TranslationOptions::new(
            self.provider,
            self.cache,
            self.detect,
            self.batch,
            self.timeout,
        )
    }
}
