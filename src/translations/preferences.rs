//! Preferences Module
//!
//! Session preferences: the language labels render in and the provider
//! translations are attributed to.

use serde::{Deserialize, Serialize};

use crate::translations::{Language, Provider};

// == Preferences ==
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub language: Language,
    pub provider: Provider,
}

impl Preferences {
    pub fn new(language: Language, provider: Provider) -> Self {
        Self { language, provider }
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn set_provider(&mut self, provider: Provider) {
        self.provider = provider;
    }

    /// Applies whichever fields of `update` are set.
    pub fn apply(&mut self, update: PreferencesUpdate) {
        if let Some(language) = update.language {
            self.set_language(language);
        }
        if let Some(provider) = update.provider {
            self.set_provider(provider);
        }
    }
}

// == Preferences Update ==
/// Partial preferences change; absent fields are left alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PreferencesUpdate {
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(default)]
    pub provider: Option<Provider>,
}
