//! Translations Module
//!
//! Languages, providers, lookup options, the translation table and the
//! resolver that ties them to the cache.

mod content;
mod language;
mod options;
mod preferences;
mod resolver;
mod table;

pub use content::{builtin_table, BUILTIN_SECTIONS};
pub use language::{Language, Provider};
pub use options::{TranslationOptions, MAX_TIMEOUT_MS, MIN_TIMEOUT_MS};
pub use preferences::{Preferences, PreferencesUpdate};
pub use resolver::{cache_key, Translation, Translator, DEFAULT_SECTION};
pub use table::{TranslationRow, TranslationTable};
