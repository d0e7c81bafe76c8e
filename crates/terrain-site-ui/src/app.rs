//! Site bootstrap: configuration, initial render and behavior activation.

use crate::behaviors::{
    AnchorScroll, Behavior, CodeCopy, LanguageToggle, ScrollEffects, SharedSite, Site,
};
use crate::config_source::{CONFIG_ELEMENT_ID, resolve_config};
use crate::dom::DomDocument;
use crate::storage::LocalStoragePreferences;
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::document;
use std::cell::RefCell;
use std::rc::Rc;
use terrain_site_i18n::{LocalizationStore, SiteConfig, TranslationTable};

/// Start the site once the document is parsed.
pub fn run_site() {
    console_error_panic_hook::set_once();
    let document = document();
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| boot()).forget();
    } else {
        boot();
    }
}

fn boot() {
    let mut dom = DomDocument::new(document());
    let config = load_config(&dom);
    let table = TranslationTable::bundled().unwrap_or_else(|err| {
        console::error!("translation table unavailable", err.to_string());
        TranslationTable::new()
    });

    let mut store = LocalizationStore::new(table, config, LocalStoragePreferences);
    let report = store.initialize(&mut dom);
    if !report.missing.is_empty() {
        console::warn!("untranslated keys", report.missing.join(", "));
    }

    let site: SharedSite = Rc::new(RefCell::new(Site {
        store,
        document: dom,
    }));
    let behaviors: [&dyn Behavior; 4] = [&LanguageToggle, &ScrollEffects, &AnchorScroll, &CodeCopy];
    for behavior in behaviors {
        let listeners = behavior.on_activate(&site);
        console::debug!(behavior.name(), listeners.len() as u32);
        for listener in listeners {
            listener.forget();
        }
    }
}

fn load_config(dom: &DomDocument) -> SiteConfig {
    let raw = dom
        .raw()
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    resolve_config(raw.as_deref()).unwrap_or_else(|err| {
        console::warn!("ignoring site configuration", err.to_string());
        SiteConfig::default()
    })
}
