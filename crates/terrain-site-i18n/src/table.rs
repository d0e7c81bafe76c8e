//! JSON-backed translation table with one flat key map per locale.

use crate::error::I18nError;
use crate::locale::{LanguageTag, Locale};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// Key → display string map for a single locale.
pub type Messages = BTreeMap<String, String>;

/// Translation dictionary for every loaded locale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslationTable {
    locales: BTreeMap<Locale, Messages>,
}

/// A key present in at least one locale but absent from `locale`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct MissingKey {
    /// Locale lacking the key.
    pub locale: Locale,
    /// Translation key.
    pub key: String,
}

impl TranslationTable {
    /// Empty table; every lookup misses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Table built from the locale files embedded in the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded file is malformed.
    pub fn bundled() -> Result<Self, I18nError> {
        let mut table = Self::new();
        for locale in Locale::all() {
            table.insert_json(locale, raw_locale(locale))?;
        }
        Ok(table)
    }

    /// Parse a flat JSON object of strings and install it for `locale`,
    /// replacing any previous messages.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is not JSON, not an object, or holds non-string values.
    pub fn insert_json(&mut self, locale: Locale, raw: &str) -> Result<(), I18nError> {
        let tree: Value = serde_json::from_str(raw)
            .map_err(|source| I18nError::InvalidPayload { locale, source })?;
        let Value::Object(entries) = tree else {
            return Err(I18nError::NotAnObject { locale });
        };
        let mut messages = Messages::new();
        for (key, value) in entries {
            match value {
                Value::String(text) => {
                    messages.insert(key, text);
                }
                _ => return Err(I18nError::NonStringEntry { locale, key }),
            }
        }
        self.insert_locale(locale, messages);
        Ok(())
    }

    /// Install a prepared message map for `locale`.
    pub fn insert_locale(&mut self, locale: Locale, messages: Messages) {
        self.locales.insert(locale, messages);
    }

    /// Builder-style variant of [`Self::insert_locale`].
    #[must_use]
    pub fn with_locale<I, K, V>(mut self, locale: Locale, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let messages = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self.insert_locale(locale, messages);
        self
    }

    /// Locales carried by the table.
    pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
        self.locales.keys().copied()
    }

    /// Messages for one locale.
    #[must_use]
    pub fn messages(&self, locale: Locale) -> Option<&Messages> {
        self.locales.get(&locale)
    }

    /// Resolve `key` for the language named by `tag`.
    ///
    /// Unsupported tags, absent keys and empty strings all miss.
    #[must_use]
    pub fn lookup(&self, tag: &LanguageTag, key: &str) -> Option<&str> {
        let locale = tag.locale()?;
        self.locales
            .get(&locale)?
            .get(key)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }

    /// Whether `locale` has a non-empty translation for `key`.
    ///
    /// Agrees with [`Self::lookup`]: an empty string is not a translation.
    #[must_use]
    pub fn has_translation(&self, locale: Locale, key: &str) -> bool {
        self.locales
            .get(&locale)
            .is_some_and(|messages| carries(messages, key))
    }

    /// Whether every loaded locale has a non-empty translation for `key`.
    #[must_use]
    pub fn has_key_everywhere(&self, key: &str) -> bool {
        !self.locales.is_empty() && self.locales.values().all(|messages| carries(messages, key))
    }

    /// Keys declared in some locale but untranslated (absent or empty) in another,
    /// sorted by locale then key.
    #[must_use]
    pub fn coverage(&self) -> Vec<MissingKey> {
        let all_keys: BTreeSet<&String> = self.locales.values().flat_map(Messages::keys).collect();
        let mut missing = Vec::new();
        for (locale, messages) in &self.locales {
            for key in &all_keys {
                if !carries(messages, key) {
                    missing.push(MissingKey {
                        locale: *locale,
                        key: (*key).clone(),
                    });
                }
            }
        }
        missing
    }
}

fn carries(messages: &Messages, key: &str) -> bool {
    messages.get(key).is_some_and(|text| !text.is_empty())
}

const fn raw_locale(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => include_str!("../i18n/ja.json"),
        Locale::En => include_str!("../i18n/en.json"),
    }
}
