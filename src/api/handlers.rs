//! API Handlers
//!
//! HTTP request handlers for each translation service endpoint.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::info;

use crate::cache::TranslationCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{
    ClearResponse, HealthResponse, LanguageTranslationsResponse, StatsResponse, TranslateQuery,
    TranslateResponse,
};
use crate::translations::{
    builtin_table, Language, Preferences, PreferencesUpdate, TranslationTable, Translator,
    DEFAULT_SECTION,
};

/// Application state shared across all handlers.
///
/// The translator owns the cache behind an `Arc<RwLock<_>>`, so cloning the
/// state hands out another reference to the same cache.
#[derive(Clone)]
pub struct AppState {
    pub translator: Translator,
}

impl AppState {
    /// Creates a new AppState around an existing translator.
    pub fn new(translator: Translator) -> Self {
        Self { translator }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Loads translation rows from `translations_path` when set, otherwise
    /// uses the built-in content.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let table = match &config.translations_path {
            Some(path) => TranslationTable::load_rows(path)?,
            None => {
                info!("No TRANSLATIONS_PATH set, using built-in labels");
                builtin_table()
            }
        };
        let cache = TranslationCache::new(config.max_entries, config.cache_expiry_ms);
        let preferences = Preferences::new(config.default_language, config.default_provider);

        Ok(Self::new(Translator::new(cache, table, preferences)))
    }
}

/// Handler for GET /translate/:section/:key
///
/// Invalid options are rejected with 400; a missing translation still
/// answers 200 with the key as text and `fallback: true`.
pub async fn translate_handler(
    State(state): State<AppState>,
    Path((section, key)): Path<(String, String)>,
    Query(query): Query<TranslateQuery>,
) -> Result<Json<TranslateResponse>> {
    let options = query.options()?;

    let translation = match query.lang {
        Some(language) => {
            state
                .translator
                .translate_in(language, &key, &section, options)
                .await
        }
        None => state.translator.translate(&key, &section, options).await,
    };

    Ok(Json(TranslateResponse::new(key, section, translation)))
}

/// Handler for GET /translate/:key
///
/// Same as [`translate_handler`] in the `common` section.
pub async fn translate_common_handler(
    state: State<AppState>,
    Path(key): Path<String>,
    query: Query<TranslateQuery>,
) -> Result<Json<TranslateResponse>> {
    translate_handler(state, Path((DEFAULT_SECTION.to_string(), key)), query).await
}

/// Handler for GET /translations/:lang
///
/// Returns every section's labels for one language. Unsupported codes
/// are rejected with 400.
pub async fn language_translations_handler(
    State(state): State<AppState>,
    Path(lang): Path<String>,
) -> Result<Json<LanguageTranslationsResponse>> {
    let language: Language = lang.parse()?;
    let sections = state.translator.table().fetch_language(language);
    Ok(Json(LanguageTranslationsResponse::new(language, sections)))
}

/// Handler for GET /preferences
pub async fn get_preferences_handler(State(state): State<AppState>) -> Json<Preferences> {
    Json(state.translator.preferences().await)
}

/// Handler for PUT /preferences
pub async fn update_preferences_handler(
    State(state): State<AppState>,
    Json(update): Json<PreferencesUpdate>,
) -> Json<Preferences> {
    let preferences = state.translator.update_preferences(update).await;
    info!(
        language = %preferences.language,
        provider = %preferences.provider,
        "Preferences updated"
    );
    Json(preferences)
}

/// Handler for DELETE /cache
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let removed = state.translator.clear_cache().await;
    info!("Translation cache cleared: {} entries removed", removed);
    Json(ClearResponse::new(removed))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::from(state.translator.cache_stats().await))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
