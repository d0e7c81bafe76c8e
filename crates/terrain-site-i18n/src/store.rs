//! Localization store: owns the active language and re-derives bound content from it.
//!
//! # Design
//! - Rendering is a full re-derivation from the table; repeated passes converge on the same output.
//! - Missing translations leave the element untouched so pre-rendered copy keeps showing.
//! - Preference failures are logged and never surface to callers.

use crate::config::SiteConfig;
use crate::document::{Content, Document, discover_bindings};
use crate::locale::LanguageTag;
use crate::preferences::PreferenceStore;
use crate::table::TranslationTable;
use tracing::{debug, info, warn};

/// Outcome of one render pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Bindings whose content was written.
    pub applied: usize,
    /// Keys that had no translation for the active language, in document order.
    pub missing: Vec<String>,
}

/// Active language plus the table and preference backend that drive it.
#[derive(Debug)]
pub struct LocalizationStore<P> {
    table: TranslationTable,
    config: SiteConfig,
    preferences: P,
    active: LanguageTag,
}

impl<P: PreferenceStore> LocalizationStore<P> {
    /// Build a store; the active language starts at the configured default
    /// until [`Self::initialize`] consults the preference backend.
    #[must_use]
    pub fn new(table: TranslationTable, config: SiteConfig, preferences: P) -> Self {
        let active = config.default_language.into();
        Self {
            table,
            config,
            preferences,
            active,
        }
    }

    /// Restore the persisted language (or the default) and render the document.
    pub fn initialize<D: Document>(&mut self, document: &mut D) -> RenderReport {
        self.active = self.restore_language();
        debug!(language = %self.active, "localization initialised");
        let report = self.render(document);
        self.mark_toggles(document);
        report
    }

    /// Switch to `language`, persist it and re-render.
    ///
    /// Unsupported identifiers are accepted: they match no translations, so
    /// bound elements keep their current content.
    pub fn set_language<D: Document>(&mut self, document: &mut D, language: &str) -> RenderReport {
        let tag = LanguageTag::new(language);
        if tag.locale().is_none() {
            debug!(language = %tag, "selected language has no translations");
        }
        info!(from = %self.active, to = %tag, "switching language");
        self.active = tag;
        if let Err(err) = self
            .preferences
            .save(&self.config.storage_key, self.active.as_str())
        {
            warn!(error = %err, "failed to persist language preference");
        }
        let report = self.render(document);
        self.mark_toggles(document);
        report
    }

    /// Synchronise every bound element with the active language.
    pub fn render<D: Document>(&self, document: &mut D) -> RenderReport {
        let mut report = RenderReport::default();
        for binding in discover_bindings(document, &self.config.key_attribute) {
            match self.table.lookup(&self.active, &binding.key) {
                Some(text) => {
                    Content::for_element(binding.kind, text).apply(document, &binding.element);
                    report.applied += 1;
                }
                None => report.missing.push(binding.key),
            }
        }
        if !report.missing.is_empty() {
            debug!(
                language = %self.active,
                missing = report.missing.len(),
                "render pass skipped untranslated keys"
            );
        }
        document.set_root_language(self.active.as_str());
        report
    }

    /// Language currently driving rendered text.
    #[must_use]
    pub const fn active_language(&self) -> &LanguageTag {
        &self.active
    }

    /// Translation of `key` in the active language.
    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        self.table.lookup(&self.active, key)
    }

    /// Success label for copy buttons in the active language.
    #[must_use]
    pub fn copied_label(&self) -> &str {
        self.text(&self.config.copy.copied_key)
            .unwrap_or(&self.config.copy.fallback_label)
    }

    /// Configuration backing the store.
    #[must_use]
    pub const fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Translation table backing the store.
    #[must_use]
    pub const fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// Release the preference backend, e.g. to rebuild the store after a reload.
    #[must_use]
    pub fn into_preferences(self) -> P {
        self.preferences
    }

    fn restore_language(&self) -> LanguageTag {
        match self.preferences.load(&self.config.storage_key) {
            Ok(Some(raw)) => {
                let tag = LanguageTag::new(&raw);
                if tag.locale().is_some() {
                    return tag;
                }
                debug!(stored = %raw, "ignoring unsupported stored language");
            }
            Ok(None) => {}
            Err(err) => warn!(error = %err, "failed to read language preference"),
        }
        self.config.default_language.into()
    }

    fn mark_toggles<D: Document>(&self, document: &mut D) {
        let attribute = &self.config.toggle_attribute;
        for toggle in document.elements_with_attribute(attribute) {
            let selected = document
                .attribute(&toggle, attribute)
                .is_some_and(|language| LanguageTag::new(&language) == self.active);
            document.set_class(&toggle, &self.config.active_class, selected);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{ElementContent, MemoryDocument};
    use crate::error::PreferenceError;
    use crate::locale::Locale;
    use crate::preferences::MemoryPreferences;

    fn table() -> TranslationTable {
        TranslationTable::new()
            .with_locale(Locale::Ja, [("hero-cta", "始める"), ("code-copied", "コピーしました！")])
            .with_locale(Locale::En, [("hero-cta", "Get Started")])
    }

    fn store(preferences: MemoryPreferences) -> LocalizationStore<MemoryPreferences> {
        LocalizationStore::new(table(), SiteConfig::default(), preferences)
    }

    struct BrokenPreferences;

    impl PreferenceStore for BrokenPreferences {
        fn load(&self, key: &str) -> Result<Option<String>, PreferenceError> {
            Err(PreferenceError::Read {
                key: key.to_string(),
                detail: "storage disabled".to_string(),
            })
        }

        fn save(&mut self, key: &str, _value: &str) -> Result<(), PreferenceError> {
            Err(PreferenceError::Write {
                key: key.to_string(),
                detail: "quota exceeded".to_string(),
            })
        }
    }

    #[test]
    fn stored_preference_wins_over_default() {
        let mut document = MemoryDocument::new();
        let cta = document.push_bound("a", "hero-cta", "");
        let mut store = store(MemoryPreferences::with_entry("lang", "EN"));

        let report = store.initialize(&mut document);
        assert_eq!(store.active_language().locale(), Some(Locale::En));
        assert_eq!(report.applied, 1);
        assert_eq!(
            document.element(cta).content,
            ElementContent::Text("Get Started".into())
        );
    }

    #[test]
    fn unsupported_stored_value_falls_back_to_default() {
        let mut document = MemoryDocument::new();
        let mut store = store(MemoryPreferences::with_entry("lang", "klingon"));
        store.initialize(&mut document);
        assert_eq!(store.active_language(), &LanguageTag::from(Locale::Ja));
        assert_eq!(document.root_language(), Some("ja"));
    }

    #[test]
    fn unreadable_storage_is_not_fatal() {
        let mut document = MemoryDocument::new();
        let cta = document.push_bound("a", "hero-cta", "");
        let mut store = LocalizationStore::new(table(), SiteConfig::default(), BrokenPreferences);

        store.initialize(&mut document);
        let report = store.set_language(&mut document, "en");
        assert_eq!(report.applied, 1);
        assert_eq!(store.active_language().as_str(), "en");
        assert_eq!(document.visual_lines(cta), vec!["Get Started"]);
    }

    #[test]
    fn unsupported_language_keeps_stale_content() {
        let mut document = MemoryDocument::new();
        let cta = document.push_bound("a", "hero-cta", "");
        let ja_toggle = document.push("button", "日本語", [("data-lang", "ja")]);
        let mut store = store(MemoryPreferences::new());
        store.initialize(&mut document);

        let report = store.set_language(&mut document, "de");
        assert_eq!(report.applied, 0);
        assert_eq!(report.missing, vec!["hero-cta".to_string()]);
        assert_eq!(document.visual_lines(cta), vec!["始める"]);
        assert_eq!(document.root_language(), Some("de"));
        assert!(!document.has_class(ja_toggle, "active"));

        let preferences = store.into_preferences();
        assert_eq!(preferences.get("lang"), Some("de"));
    }

    #[test]
    fn toggles_track_active_language() {
        let mut document = MemoryDocument::new();
        let ja = document.push("button", "日本語", [("data-lang", "ja")]);
        let en = document.push("button", "English", [("data-lang", "en")]);
        let mut store = store(MemoryPreferences::new());

        store.initialize(&mut document);
        assert!(document.has_class(ja, "active"));
        assert!(!document.has_class(en, "active"));

        store.set_language(&mut document, "en");
        assert!(!document.has_class(ja, "active"));
        assert!(document.has_class(en, "active"));
    }

    #[test]
    fn copied_label_falls_back_when_untranslated() {
        let mut document = MemoryDocument::new();
        let mut store = store(MemoryPreferences::new());
        store.initialize(&mut document);
        assert_eq!(store.copied_label(), "コピーしました！");

        store.set_language(&mut document, "en");
        assert_eq!(store.copied_label(), "Copied!");
        assert_eq!(store.text("hero-cta"), Some("Get Started"));
    }
}
