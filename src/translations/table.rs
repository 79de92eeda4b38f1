//! Table Module
//!
//! Translation table: section -> language -> nested key/value content,
//! built from bundled content or from database-shaped rows.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::error::{Result, TranslationError};
use crate::translations::Language;

// == Translation Row ==
/// One translated string as stored in the translations database, joined
/// with its key and section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRow {
    pub value: String,
    /// Dotted key, e.g. `sort.popularity`
    pub key: String,
    pub section: String,
    pub language_code: String,
}

// == Translation Table ==
/// Lookup table for every section and language.
///
/// Each `(section, language)` pair holds a JSON object whose leaves are the
/// translated strings; dotted keys address nested objects.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    sections: HashMap<String, HashMap<Language, Value>>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole content of one section in one language.
    pub fn insert_section(&mut self, section: &str, language: Language, content: Value) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(language, content);
    }

    // == Insert ==
    /// Sets a single string, creating intermediate objects for dotted keys.
    ///
    /// A string sitting where a nested object is needed gets replaced.
    pub fn insert(&mut self, section: &str, language: Language, key: &str, value: String) {
        let root = self
            .sections
            .entry(section.to_string())
            .or_default()
            .entry(language)
            .or_insert_with(|| Value::Object(Map::new()));
        if !root.is_object() {
            *root = Value::Object(Map::new());
        }
        let Value::Object(root_map) = root else {
            return;
        };
        let mut current = root_map;

        let segments: Vec<&str> = key.split('.').collect();
        let Some((last, parents)) = segments.split_last() else {
            return;
        };

        for part in parents {
            let slot = current
                .entry(part.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            let Value::Object(next) = slot else {
                return;
            };
            current = next;
        }

        current.insert(last.to_string(), Value::String(value));
    }

    // == From Rows ==
    /// Builds a table from database rows. Rows for unsupported languages are
    /// skipped.
    pub fn from_rows(rows: impl IntoIterator<Item = TranslationRow>) -> Self {
        let mut table = Self::new();
        for row in rows {
            match row.language_code.parse::<Language>() {
                Ok(language) => table.insert(&row.section, language, &row.key, row.value),
                Err(_) => warn!(
                    language_code = %row.language_code,
                    key = %row.key,
                    "Skipping translation row for unsupported language"
                ),
            }
        }
        table
    }

    // == Load Rows ==
    /// Reads a JSON array of [`TranslationRow`]s from `path`.
    pub fn load_rows(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            TranslationError::Source(format!("failed to read {}: {e}", path.display()))
        })?;
        let rows: Vec<TranslationRow> = serde_json::from_str(&raw).map_err(|e| {
            TranslationError::Source(format!("failed to parse {}: {e}", path.display()))
        })?;

        info!("Loaded {} translation rows from {}", rows.len(), path.display());
        Ok(Self::from_rows(rows))
    }

    // == Lookup ==
    /// Resolves a dotted `key` in `section` for `language`.
    ///
    /// Fails with [`TranslationError::NotFound`] when the section, any path
    /// segment, or a string leaf is missing.
    pub fn lookup(&self, section: &str, language: Language, key: &str) -> Result<String> {
        let not_found = || TranslationError::NotFound(key.to_string());

        let mut current = self
            .sections
            .get(section)
            .and_then(|languages| languages.get(&language))
            .ok_or_else(not_found)?;

        for part in key.split('.') {
            current = current.get(part).ok_or_else(not_found)?;
        }

        current.as_str().map(str::to_string).ok_or_else(not_found)
    }

    // == Fetch Language ==
    /// Returns every section's content for one language, keyed by section.
    pub fn fetch_language(&self, language: Language) -> Map<String, Value> {
        self.sections
            .iter()
            .filter_map(|(section, languages)| {
                languages
                    .get(&language)
                    .map(|content| (section.clone(), content.clone()))
            })
            .collect()
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Section names, sorted.
    pub fn sections(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sections.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
