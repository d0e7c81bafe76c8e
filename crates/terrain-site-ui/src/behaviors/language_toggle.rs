//! Language switch controls (`[data-lang]` buttons).

use super::{Behavior, SharedSite};
use gloo::events::EventListener;
use terrain_site_i18n::Document;

pub(crate) struct LanguageToggle;

impl Behavior for LanguageToggle {
    fn name(&self) -> &'static str {
        "language-toggle"
    }

    fn on_activate(&self, site: &SharedSite) -> Vec<EventListener> {
        let (toggles, attribute) = {
            let site = site.borrow();
            let attribute = site.store.config().toggle_attribute.clone();
            (site.document.elements_with_attribute(&attribute), attribute)
        };

        toggles
            .into_iter()
            .map(|toggle| {
                let site = site.clone();
                let attribute = attribute.clone();
                let control = toggle.clone();
                EventListener::new(&toggle, "click", move |_| {
                    if let Some(language) = control.get_attribute(&attribute) {
                        site.borrow_mut().select_language(&language);
                    }
                })
            })
            .collect()
    }
}
