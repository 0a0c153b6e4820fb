use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One key to translate, with the languages it still lacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRequest {
    pub key: String,
    /// Source text. Catalog keys double as the source-language text.
    pub text: String,
    pub target_languages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Action taken on a (key, language) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Added,
    Updated,
}

impl KeyAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyAction::Added => "added",
            KeyAction::Updated => "updated",
        }
    }
}

/// Per-key record of which languages were requested during one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceEntry {
    pub languages: Vec<String>,
    /// True when the language had no localization entry before the pass.
    pub is_new: IndexMap<String, bool>,
}

impl TraceEntry {
    pub fn push(&mut self, language: &str, is_new: bool) {
        if self.is_new.insert(language.to_string(), is_new).is_none() {
            self.languages.push(language.to_string());
        }
    }

    pub fn contains(&self, language: &str) -> bool {
        self.is_new.contains_key(language)
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Change classification for a requested language.
    pub fn action(&self, language: &str) -> KeyAction {
        if self.is_new.get(language).copied().unwrap_or(false) {
            KeyAction::Added
        } else {
            KeyAction::Updated
        }
    }
}

/// Trace entries keyed by catalog key, in request order.
pub type Trace = IndexMap<String, TraceEntry>;

/// Provider reply for a whole batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResponse {
    #[serde(default)]
    pub translations: Vec<TranslatedEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedEntry {
    pub key: String,
    /// Language code to translated text.
    #[serde(default)]
    pub translations: IndexMap<String, String>,
}

/// Human-readable label for a (key, language) pair: `"<key> (<language>)"`.
pub fn change_label(key: &str, language: &str) -> String {
    format!("{} ({})", key, language)
}
