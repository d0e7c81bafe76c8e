//! Page behaviors activated once the localization store has rendered.
//!
//! # Design
//! - Each behavior owns its listeners and only touches the store through [`Site`].
//! - Behaviors never depend on each other; activation order is irrelevant.
//! - Listeners live for the page lifetime; the caller decides how to retain them.

use crate::dom::DomDocument;
use crate::storage::LocalStoragePreferences;
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use terrain_site_i18n::LocalizationStore;

mod anchors;
mod code_copy;
mod language_toggle;
mod scroll;

pub(crate) use anchors::AnchorScroll;
pub(crate) use code_copy::CodeCopy;
pub(crate) use language_toggle::LanguageToggle;
pub(crate) use scroll::ScrollEffects;

/// Localization store paired with the document it renders into.
pub(crate) struct Site {
    pub(crate) store: LocalizationStore<LocalStoragePreferences>,
    pub(crate) document: DomDocument,
}

impl Site {
    /// Apply a language selection from a toggle control.
    pub(crate) fn select_language(&mut self, language: &str) {
        let Self { store, document } = self;
        store.set_language(document, language);
    }
}

pub(crate) type SharedSite = Rc<RefCell<Site>>;

/// Leaf page behavior wired on activation.
pub(crate) trait Behavior {
    /// Short name for diagnostics.
    fn name(&self) -> &'static str;

    /// Attach event handlers and return the listeners to retain.
    fn on_activate(&self, site: &SharedSite) -> Vec<EventListener>;
}
