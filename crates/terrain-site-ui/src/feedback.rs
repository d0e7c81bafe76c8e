//! Transient UI feedback derived from the localization store.

use terrain_site_i18n::{Content, Document, ElementKind, LocalizationStore, PreferenceStore};

/// Label swap shown on a copy button after a successful clipboard write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyFeedback {
    /// Success label in the active language.
    pub label: String,
    /// Colour applied while the label shows.
    pub color: String,
    /// Delay before the original label and colour come back.
    pub revert_after_ms: u32,
}

impl CopyFeedback {
    /// Feedback for the store's current language and copy settings.
    #[must_use]
    pub fn for_store<P: PreferenceStore>(store: &LocalizationStore<P>) -> Self {
        let copy = &store.config().copy;
        Self {
            label: store.copied_label().to_string(),
            color: copy.success_color.clone(),
            revert_after_ms: copy.feedback_ms,
        }
    }

    /// Replace the button label with the success label.
    ///
    /// `pending` is the restore of an earlier swap whose timer has not fired yet;
    /// it is carried forward so the success label is never captured as the original.
    pub fn show<P, D>(
        &self,
        store: &LocalizationStore<P>,
        document: &mut D,
        button: &D::Element,
        pending: Option<LabelRestore>,
    ) -> LabelRestore
    where
        P: PreferenceStore,
        D: Document,
    {
        let restore = pending.unwrap_or_else(|| LabelRestore {
            key: document
                .attribute(button, &store.config().key_attribute)
                .filter(|key| !key.trim().is_empty()),
            original: document.text(button),
        });
        document.set_text(button, &self.label);
        restore
    }
}

/// How to put a copy button's label back once its feedback expires.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelRestore {
    key: Option<String>,
    original: String,
}

impl LabelRestore {
    /// Restore the label in the language active now.
    ///
    /// Bound buttons are re-translated from their key; unbound buttons, or keys
    /// the active language lacks, get the text captured before the swap.
    pub fn apply<P, D>(&self, store: &LocalizationStore<P>, document: &mut D, button: &D::Element)
    where
        P: PreferenceStore,
        D: Document,
    {
        match self.key.as_deref().and_then(|key| store.text(key)) {
            Some(text) => {
                let kind = ElementKind::from_tag_name(&document.tag_name(button));
                Content::for_element(kind, text).apply(document, button);
            }
            None => document.set_text(button, &self.original),
        }
    }
}

/// Element id targeted by an in-page anchor `href`, if it names one.
#[must_use]
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use terrain_site_i18n::{
        ElementId, I18nError, MemoryDocument, MemoryPreferences, SiteConfig, TranslationTable,
    };

    fn copy_page() -> Result<(LocalizationStore<MemoryPreferences>, MemoryDocument, ElementId), I18nError> {
        let mut store = LocalizationStore::new(
            TranslationTable::bundled()?,
            SiteConfig::default(),
            MemoryPreferences::new(),
        );
        let mut document = MemoryDocument::new();
        let button = document.push_bound("button", "code-copy", "コピー");
        store.initialize(&mut document);
        Ok((store, document, button))
    }

    #[test]
    fn copy_feedback_follows_active_language() -> Result<(), I18nError> {
        let (mut store, mut document, _) = copy_page()?;
        assert_eq!(CopyFeedback::for_store(&store).label, "コピーしました！");

        store.set_language(&mut document, "en");
        let feedback = CopyFeedback::for_store(&store);
        assert_eq!(
            feedback,
            CopyFeedback {
                label: "Copied!".to_string(),
                color: "var(--color-success)".to_string(),
                revert_after_ms: 2000,
            }
        );
        Ok(())
    }

    #[test]
    fn copy_label_swaps_then_reverts() -> Result<(), I18nError> {
        let (store, mut document, button) = copy_page()?;
        let feedback = CopyFeedback::for_store(&store);

        let restore = feedback.show(&store, &mut document, &button, None);
        assert_eq!(document.text(&button), "コピーしました！");

        restore.apply(&store, &mut document, &button);
        assert_eq!(document.text(&button), "コピー");
        Ok(())
    }

    #[test]
    fn revert_uses_language_active_when_timer_fires() -> Result<(), I18nError> {
        let (mut store, mut document, button) = copy_page()?;
        let restore = CopyFeedback::for_store(&store).show(&store, &mut document, &button, None);

        store.set_language(&mut document, "en");
        restore.apply(&store, &mut document, &button);
        assert_eq!(document.text(&button), "Copy");
        assert_eq!(document.root_language(), Some("en"));
        Ok(())
    }

    #[test]
    fn repeated_copy_keeps_first_original_label() -> Result<(), I18nError> {
        let (store, mut document, _) = copy_page()?;
        let button = document.push("button", "Copy snippet", [("class", "code-block-copy")]);
        let feedback = CopyFeedback::for_store(&store);

        let first = feedback.show(&store, &mut document, &button, None);
        let second = feedback.show(&store, &mut document, &button, Some(first.clone()));
        assert_eq!(second, first);
        assert_eq!(document.text(&button), "コピーしました！");

        second.apply(&store, &mut document, &button);
        assert_eq!(document.text(&button), "Copy snippet");
        Ok(())
    }

    #[test]
    fn anchor_ids_require_a_fragment_name() {
        assert_eq!(anchor_target_id("#setup"), Some("setup"));
        assert_eq!(anchor_target_id("#"), None);
        assert_eq!(anchor_target_id("https://example.com/#setup"), None);
    }
}
