//! Sticky-header state and reveal-on-scroll animations.

use super::{Behavior, SharedSite};
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::window;
use js_sys::Array;
use terrain_site_i18n::ScrollConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub(crate) struct ScrollEffects;

impl Behavior for ScrollEffects {
    fn name(&self) -> &'static str {
        "scroll-effects"
    }

    fn on_activate(&self, site: &SharedSite) -> Vec<EventListener> {
        let site = site.borrow();
        let config = site.store.config().scroll.clone();

        let reveal_targets = site.document.query_all(&config.reveal_selector);
        observe_reveals(&config, &reveal_targets);

        let header = site
            .document
            .raw()
            .query_selector(&config.header_selector)
            .ok()
            .flatten();
        let Some(header) = header else {
            return Vec::new();
        };
        let listener = EventListener::new(&window(), "scroll", move |_| {
            let offset = window().scroll_y().unwrap_or(0.0);
            if let Err(err) = header
                .class_list()
                .toggle_with_force(&config.scrolled_class, config.is_scrolled(offset))
            {
                console::error!("Failed to toggle header class:", err);
            }
        });
        vec![listener]
    }
}

fn observe_reveals(config: &ScrollConfig, targets: &[web_sys::Element]) {
    if targets.is_empty() {
        return;
    }
    let reveal_class = config.reveal_class.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting()
                    && let Err(err) = entry.target().class_list().add_1(&reveal_class)
                {
                    console::error!("Failed to reveal element:", err);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    options.set_root_margin(&config.reveal_root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for target in targets {
                observer.observe(target);
            }
            // Observer and callback stay alive with the page.
            callback.forget();
        }
        Err(err) => console::error!("intersection observer unavailable", err),
    }
}
