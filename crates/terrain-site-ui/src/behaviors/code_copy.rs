//! Copy buttons next to code blocks.

use super::{Behavior, SharedSite, Site};
use crate::feedback::{CopyFeedback, LabelRestore};
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::window;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use terrain_site_i18n::CopyConfig;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{CssStyleDeclaration, Element, HtmlElement};

pub(crate) struct CodeCopy;

/// Feedback still showing on one button.
#[derive(Default)]
struct PendingRevert {
    restore: Option<LabelRestore>,
    timer: Option<Timeout>,
}

type PendingSlot = Rc<RefCell<PendingRevert>>;

impl Behavior for CodeCopy {
    fn name(&self) -> &'static str {
        "code-copy"
    }

    fn on_activate(&self, site: &SharedSite) -> Vec<EventListener> {
        let (buttons, config) = {
            let site = site.borrow();
            let config = site.store.config().copy.clone();
            (site.document.query_all(&config.button_selector), config)
        };

        buttons
            .into_iter()
            .map(|button| {
                let site = site.clone();
                let config = config.clone();
                let slot = PendingSlot::default();
                let target = button.clone();
                EventListener::new(&button, "click", move |_| {
                    let Some(text) = code_text(&target, &config) else {
                        return;
                    };
                    let site = site.clone();
                    let slot = slot.clone();
                    let button = target.clone();
                    spawn_local(async move {
                        let promise = window().navigator().clipboard().write_text(&text);
                        match JsFuture::from(promise).await {
                            Ok(_) => show_feedback(&site, &slot, button),
                            Err(err) => console::error!("Failed to copy:", err),
                        }
                    });
                })
            })
            .collect()
    }
}

fn code_text(button: &Element, config: &CopyConfig) -> Option<String> {
    button
        .closest(&config.block_selector)
        .ok()
        .flatten()?
        .query_selector(&config.code_selector)
        .ok()
        .flatten()?
        .text_content()
}

fn show_feedback(site: &SharedSite, slot: &PendingSlot, button: Element) {
    let mut pending = slot.borrow_mut();
    // Dropping an armed timeout cancels it.
    drop(pending.timer.take());

    let feedback = {
        let mut site = site.borrow_mut();
        let Site { store, document } = &mut *site;
        let feedback = CopyFeedback::for_store(store);
        let restore = feedback.show(store, document, &button, pending.restore.take());
        pending.restore = Some(restore);
        feedback
    };
    let style = button.dyn_ref::<HtmlElement>().map(HtmlElement::style);
    if let Some(style) = &style
        && let Err(err) = style.set_property("color", &feedback.color)
    {
        console::error!("Failed to set copy feedback colour:", err);
    }

    let site = site.clone();
    let expired = slot.clone();
    pending.timer = Some(Timeout::new(feedback.revert_after_ms, move || {
        // The fired timer stays in the slot; the next click drops it.
        let Some(restore) = expired.borrow_mut().restore.take() else {
            return;
        };
        let mut site = site.borrow_mut();
        let Site { store, document } = &mut *site;
        restore.apply(store, document, &button);
        if let Some(style) = &style {
            clear_color(style);
        }
    }));
}

fn clear_color(style: &CssStyleDeclaration) {
    if let Err(err) = style.remove_property("color") {
        console::error!("Failed to clear copy feedback colour:", err);
    }
}
