//! Smooth scrolling for in-page anchors.

use super::{Behavior, SharedSite};
use crate::feedback::anchor_target_id;
use gloo::events::{EventListener, EventListenerOptions};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

pub(crate) struct AnchorScroll;

impl Behavior for AnchorScroll {
    fn name(&self) -> &'static str {
        "anchor-scroll"
    }

    fn on_activate(&self, site: &SharedSite) -> Vec<EventListener> {
        let site = site.borrow();
        let document = site.document.raw().clone();

        site.document
            .query_all(&site.store.config().anchor_selector)
            .into_iter()
            .map(|anchor| {
                let link = anchor.clone();
                let document = document.clone();
                EventListener::new_with_options(
                    &anchor,
                    "click",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        event.prevent_default();
                        let Some(href) = link.get_attribute("href") else {
                            return;
                        };
                        let Some(target) =
                            anchor_target_id(&href).and_then(|id| document.get_element_by_id(id))
                        else {
                            return;
                        };
                        let options = ScrollIntoViewOptions::new();
                        options.set_behavior(ScrollBehavior::Smooth);
                        options.set_block(ScrollLogicalPosition::Start);
                        target.scroll_into_view_with_scroll_into_view_options(&options);
                    },
                )
            })
            .collect()
    }
}
