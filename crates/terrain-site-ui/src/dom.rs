//! Live DOM adapter for the localization binder.

use gloo::console;
use terrain_site_i18n::Document;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlTextAreaElement, NodeList};

/// `web_sys::Document` wrapper implementing the binder's document seam.
#[derive(Clone, Debug)]
pub(crate) struct DomDocument {
    document: web_sys::Document,
}

impl DomDocument {
    pub(crate) const fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    pub(crate) const fn raw(&self) -> &web_sys::Document {
        &self.document
    }

    /// Elements matching `selector`; invalid selectors are logged and match nothing.
    pub(crate) fn query_all(&self, selector: &str) -> Vec<Element> {
        match self.document.query_selector_all(selector) {
            Ok(list) => elements(&list),
            Err(err) => {
                console::error!("invalid selector", selector, err);
                Vec::new()
            }
        }
    }
}

pub(crate) fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

impl Document for DomDocument {
    type Element = Element;

    fn elements_with_attribute(&self, name: &str) -> Vec<Element> {
        self.query_all(&format!("[{name}]"))
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn tag_name(&self, element: &Element) -> String {
        element.tag_name()
    }

    fn text(&self, element: &Element) -> String {
        element.text_content().unwrap_or_default()
    }

    fn set_text(&mut self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn set_markup(&mut self, element: &Element, markup: &str) {
        element.set_inner_html(markup);
    }

    fn set_value(&mut self, element: &Element, value: &str) {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        } else {
            element.set_text_content(Some(value));
        }
    }

    fn set_class(&mut self, element: &Element, class: &str, enabled: bool) {
        if let Err(err) = element.class_list().toggle_with_force(class, enabled) {
            console::error!("class toggle failed", class, err);
        }
    }

    fn set_root_language(&mut self, tag: &str) {
        if let Some(root) = self.document.document_element()
            && let Err(err) = root.set_attribute("lang", tag)
        {
            console::error!("Failed to set document language:", err);
        }
    }
}
