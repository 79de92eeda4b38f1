//! Translation Cache - localized label lookup
//!
//! Resolves text keys into the session language, with an expiring, bounded
//! in-memory cache in front of the translation table.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod translations;

pub use api::AppState;
pub use cache::TranslationCache;
pub use config::Config;
pub use error::{Result, TranslationError};
pub use translations::{Language, Provider, TranslationOptions, Translator};
