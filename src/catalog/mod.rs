//! String catalog model.
//!
//! Typed view of an `.xcstrings` document. Fields the engine does not reason
//! about (`variations`, `substitutions`, `isCommentAutoGenerated`, ...) are
//! kept in passthrough maps, and every object remembers its key order, so a
//! parse/serialize cycle reproduces the authoring tool's file.

mod order;
mod serialize;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use order::{take, take_required};

pub use order::KeyOrder;
pub use serialize::{CatalogFormatter, serialize, to_catalog_string};

/// Extraction state the authoring tool assigns to strings no longer found in source.
pub const STALE_STATE: &str = "stale";

/// Localization state written for every value produced by a sync.
pub const TRANSLATED_STATE: &str = "translated";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("catalog has an invalid shape: {0}")]
    InvalidShape(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Catalog {
    pub source_language: String,
    pub strings: IndexMap<String, Entry>,
    pub version: Option<String>,
    pub extra: Map<String, Value>,
    pub key_order: KeyOrder,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Entry {
    pub comment: Option<String>,
    pub extraction_state: Option<String>,
    pub localizations: Option<IndexMap<String, Localization>>,
    pub should_translate: Option<bool>,
    pub extra: Map<String, Value>,
    pub key_order: KeyOrder,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Localization {
    pub string_unit: Option<StringUnit>,
    pub extra: Map<String, Value>,
    pub key_order: KeyOrder,
}

impl TryFrom<Map<String, Value>> for Catalog {
    type Error = serde_json::Error;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let key_order = KeyOrder::of(&map);
        Ok(Self {
            source_language: take_required(&mut map, "sourceLanguage")?,
            strings: take_required(&mut map, "strings")?,
            version: take(&mut map, "version")?,
            extra: map,
            key_order,
        })
    }
}

impl TryFrom<Map<String, Value>> for Entry {
    type Error = serde_json::Error;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let key_order = KeyOrder::of(&map);
        Ok(Self {
            comment: take(&mut map, "comment")?,
            extraction_state: take(&mut map, "extractionState")?,
            localizations: take(&mut map, "localizations")?,
            should_translate: take(&mut map, "shouldTranslate")?,
            extra: map,
            key_order,
        })
    }
}

impl TryFrom<Map<String, Value>> for Localization {
    type Error = serde_json::Error;

    fn try_from(mut map: Map<String, Value>) -> Result<Self, Self::Error> {
        let key_order = KeyOrder::of(&map);
        Ok(Self {
            string_unit: take(&mut map, "stringUnit")?,
            extra: map,
            key_order,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringUnit {
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub value: String,
}

impl StringUnit {
    pub fn translated(value: impl Into<String>) -> Self {
        Self {
            state: TRANSLATED_STATE.to_string(),
            value: value.into(),
        }
    }

    /// Empty unit materialized for a language that is waiting on the provider.
    pub fn placeholder() -> Self {
        Self::translated(String::new())
    }
}

/// How far a single language of an entry is localized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalizationStatus {
    /// No localization entry exists for the language.
    Missing,
    /// An entry exists but has no string unit or an empty value.
    Empty,
    /// A non-empty value is present.
    Translated,
}

impl LocalizationStatus {
    pub fn needs_translation(self) -> bool {
        self != LocalizationStatus::Translated
    }
}

impl Entry {
    pub fn is_stale(&self) -> bool {
        self.extraction_state.as_deref() == Some(STALE_STATE)
    }

    /// False only when the entry is explicitly marked `shouldTranslate: false`.
    pub fn is_translatable(&self) -> bool {
        self.should_translate != Some(false)
    }

    pub fn localization(&self, language: &str) -> Option<&Localization> {
        self.localizations.as_ref()?.get(language)
    }

    pub fn status(&self, language: &str) -> LocalizationStatus {
        match self.localization(language) {
            None => LocalizationStatus::Missing,
            Some(localization) => match &localization.string_unit {
                Some(unit) if !unit.value.is_empty() => LocalizationStatus::Translated,
                _ => LocalizationStatus::Empty,
            },
        }
    }

    /// Returns the non-empty translated value for `language`, if any.
    pub fn translated_value(&self, language: &str) -> Option<&str> {
        self.localization(language)?
            .string_unit
            .as_ref()
            .map(|unit| unit.value.as_str())
            .filter(|value| !value.is_empty())
    }

    fn localization_mut(&mut self, language: &str) -> &mut Localization {
        self.localizations
            .get_or_insert_with(IndexMap::new)
            .entry(language.to_string())
            .or_default()
    }

    /// Make sure `language` has a string unit, resetting a missing or empty
    /// one to an empty `translated` placeholder.
    ///
    /// A non-empty value is left as it is; other localization data
    /// (e.g. `variations`) is never touched.
    pub fn ensure_placeholder(&mut self, language: &str) {
        let localization = self.localization_mut(language);
        let has_value = localization
            .string_unit
            .as_ref()
            .is_some_and(|unit| !unit.value.is_empty());
        if !has_value {
            localization.string_unit = Some(StringUnit::placeholder());
        }
    }

    pub fn set_translation(&mut self, language: &str, value: &str) {
        self.localization_mut(language).string_unit = Some(StringUnit::translated(value));
    }
}

impl Catalog {
    pub fn new(source_language: impl Into<String>) -> Self {
        Self {
            source_language: source_language.into(),
            strings: IndexMap::new(),
            version: None,
            extra: Map::new(),
            key_order: KeyOrder::default(),
        }
    }

    /// Parse catalog text, rejecting anything that is not a well-formed catalog.
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let value: Value = serde_json::from_str(text)?;
        let Value::Object(root) = &value else {
            return Err(CatalogError::InvalidShape(
                "root must be a JSON object".to_string(),
            ));
        };

        match root.get("sourceLanguage") {
            Some(Value::String(code)) if !code.is_empty() => {}
            Some(_) => {
                return Err(CatalogError::InvalidShape(
                    "\"sourceLanguage\" must be a non-empty string".to_string(),
                ));
            }
            None => {
                return Err(CatalogError::InvalidShape(
                    "missing \"sourceLanguage\"".to_string(),
                ));
            }
        }
        if !matches!(root.get("strings"), Some(Value::Object(_))) {
            return Err(CatalogError::InvalidShape(
                "\"strings\" must be an object".to_string(),
            ));
        }

        serde_json::from_value(value).map_err(|err| CatalogError::InvalidShape(err.to_string()))
    }
}
