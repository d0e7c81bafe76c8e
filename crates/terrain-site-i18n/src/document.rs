//! Document seam, binding discovery and content rendering.
//!
//! # Design
//! - The render pass only talks to [`Document`], so the same binder drives the
//!   browser DOM and the in-memory [`MemoryDocument`] used by tests and tooling.
//! - Binding discovery is a pure read of the document; nothing is cached between passes.
//! - Content shaping (plain text vs. markup vs. input value) is decided here, not by adapters.

use std::collections::{BTreeMap, BTreeSet};

/// Marker embedded in display strings for a visual line break.
pub const LINE_BREAK: char = '\n';
/// Markup emitted for each [`LINE_BREAK`] in rich content.
pub const BREAK_TAG: &str = "<br>";

/// Minimal document surface the binder needs.
pub trait Document {
    /// Handle to one element of the document.
    type Element: Clone;

    /// Every element carrying attribute `name`, in document order.
    fn elements_with_attribute(&self, name: &str) -> Vec<Self::Element>;
    /// Attribute value of `element`, if set.
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;
    /// Tag name of `element` (any case).
    fn tag_name(&self, element: &Self::Element) -> String;
    /// Text content of `element`, markup stripped.
    fn text(&self, element: &Self::Element) -> String;
    /// Replace the element's content with escaped plain text.
    fn set_text(&mut self, element: &Self::Element, text: &str);
    /// Replace the element's content with interpreted markup.
    fn set_markup(&mut self, element: &Self::Element, markup: &str);
    /// Set the editable value of an input-style control.
    fn set_value(&mut self, element: &Self::Element, value: &str);
    /// Add or remove a class on the element.
    fn set_class(&mut self, element: &Self::Element, class: &str, enabled: bool);
    /// Record the active language on the document root.
    fn set_root_language(&mut self, tag: &str);
}

/// How a bound element receives its translation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementKind {
    /// `INPUT` / `TEXTAREA`: the translation becomes the editable value.
    Input,
    /// Any other element: the translation becomes its content.
    Content,
}

impl ElementKind {
    /// Classify an element from its tag name.
    #[must_use]
    pub fn from_tag_name(tag: &str) -> Self {
        if tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea") {
            Self::Input
        } else {
            Self::Content
        }
    }
}

/// Association between one element and its translation key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Binding<E> {
    /// Element handle.
    pub element: E,
    /// Translation key declared by the element.
    pub key: String,
    /// Element classification.
    pub kind: ElementKind,
}

/// Discover the current binding set: every element declaring a non-empty key under `attribute`.
pub fn discover_bindings<D: Document>(document: &D, attribute: &str) -> Vec<Binding<D::Element>> {
    document
        .elements_with_attribute(attribute)
        .into_iter()
        .filter_map(|element| {
            let key = document.attribute(&element, attribute)?;
            if key.trim().is_empty() {
                return None;
            }
            let kind = ElementKind::from_tag_name(&document.tag_name(&element));
            Some(Binding { element, key, kind })
        })
        .collect()
}

/// Shaped translation ready to apply to an element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content<'a> {
    /// Literal editable value.
    Value(&'a str),
    /// Markup with line breaks converted to [`BREAK_TAG`].
    Markup(String),
    /// Plain text, escaped by the platform.
    Text(&'a str),
}

impl<'a> Content<'a> {
    /// Shape `text` for an element of `kind`.
    #[must_use]
    pub fn for_element(kind: ElementKind, text: &'a str) -> Self {
        match kind {
            ElementKind::Input => Self::Value(text),
            ElementKind::Content if text.contains(LINE_BREAK) => {
                Self::Markup(text.replace(LINE_BREAK, BREAK_TAG))
            }
            ElementKind::Content => Self::Text(text),
        }
    }

    /// Write the content to `element`.
    pub fn apply<D: Document>(&self, document: &mut D, element: &D::Element) {
        match self {
            Self::Value(value) => document.set_value(element, value),
            Self::Markup(markup) => document.set_markup(element, markup),
            Self::Text(text) => document.set_text(element, text),
        }
    }
}

/// Handle into a [`MemoryDocument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// Content held by a [`MemoryElement`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElementContent {
    /// Plain text node.
    Text(String),
    /// Interpreted markup.
    Markup(String),
}

impl ElementContent {
    /// Text a browser would report for the content, with tags removed.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Markup(markup) => strip_tags(markup),
        }
    }

    /// Lines as a browser would display them (`<br>` splits markup; text is shown literally).
    #[must_use]
    pub fn visual_lines(&self) -> Vec<String> {
        match self {
            Self::Text(text) => vec![text.clone()],
            Self::Markup(markup) => markup.split(BREAK_TAG).map(ToString::to_string).collect(),
        }
    }
}

fn strip_tags(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(ch),
            _ => {}
        }
    }
    text
}

/// One element of a [`MemoryDocument`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryElement {
    /// Upper-case tag name, as the DOM reports it.
    pub tag: String,
    /// Attributes by name.
    pub attributes: BTreeMap<String, String>,
    /// Element content.
    pub content: ElementContent,
    /// Editable value for input-style controls.
    pub value: Option<String>,
    /// Class list.
    pub classes: BTreeSet<String>,
}

/// In-memory document used by tests and native tooling.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    elements: Vec<MemoryElement>,
    root_language: Option<String>,
    writes: usize,
}

impl MemoryDocument {
    /// Empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element with initial text and attributes.
    pub fn push<'a, I>(&mut self, tag: &str, text: &str, attributes: I) -> ElementId
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        self.elements.push(MemoryElement {
            tag: tag.to_ascii_uppercase(),
            attributes: attributes
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            content: ElementContent::Text(text.to_string()),
            value: None,
            classes: BTreeSet::new(),
        });
        ElementId(self.elements.len() - 1)
    }

    /// Append an element bound to `key` through the `data-i18n` attribute.
    pub fn push_bound(&mut self, tag: &str, key: &str, text: &str) -> ElementId {
        self.push(tag, text, [("data-i18n", key)])
    }

    /// Element by handle.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by another document.
    #[must_use]
    pub fn element(&self, id: ElementId) -> &MemoryElement {
        &self.elements[id.0]
    }

    /// Lines currently displayed by the element.
    #[must_use]
    pub fn visual_lines(&self, id: ElementId) -> Vec<String> {
        self.element(id).content.visual_lines()
    }

    /// Whether the element carries `class`.
    #[must_use]
    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.element(id).classes.contains(class)
    }

    /// Value of the root `lang` attribute.
    #[must_use]
    pub fn root_language(&self) -> Option<&str> {
        self.root_language.as_deref()
    }

    /// Number of content, value or class writes applied to elements so far.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }

    fn element_mut(&mut self, id: ElementId) -> &mut MemoryElement {
        self.writes += 1;
        &mut self.elements[id.0]
    }
}

impl Document for MemoryDocument {
    type Element = ElementId;

    fn elements_with_attribute(&self, name: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.attributes.contains_key(name))
            .map(|(index, _)| ElementId(index))
            .collect()
    }

    fn attribute(&self, element: &ElementId, name: &str) -> Option<String> {
        self.elements.get(element.0)?.attributes.get(name).cloned()
    }

    fn tag_name(&self, element: &ElementId) -> String {
        self.elements
            .get(element.0)
            .map(|element| element.tag.clone())
            .unwrap_or_default()
    }

    fn text(&self, element: &ElementId) -> String {
        self.elements
            .get(element.0)
            .map(|element| element.content.text())
            .unwrap_or_default()
    }

    fn set_text(&mut self, element: &ElementId, text: &str) {
        self.element_mut(*element).content = ElementContent::Text(text.to_string());
    }

    fn set_markup(&mut self, element: &ElementId, markup: &str) {
        self.element_mut(*element).content = ElementContent::Markup(markup.to_string());
    }

    fn set_value(&mut self, element: &ElementId, value: &str) {
        self.element_mut(*element).value = Some(value.to_string());
    }

    fn set_class(&mut self, element: &ElementId, class: &str, enabled: bool) {
        let classes = &mut self.element_mut(*element).classes;
        if enabled {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn set_root_language(&mut self, tag: &str) {
        self.root_language = Some(tag.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_kind_recognises_input_controls() {
        assert_eq!(ElementKind::from_tag_name("INPUT"), ElementKind::Input);
        assert_eq!(ElementKind::from_tag_name("textarea"), ElementKind::Input);
        assert_eq!(ElementKind::from_tag_name("SPAN"), ElementKind::Content);
        assert_eq!(ElementKind::from_tag_name("select"), ElementKind::Content);
    }

    #[test]
    fn discovery_skips_unbound_and_blank_keys() {
        let mut document = MemoryDocument::new();
        let title = document.push_bound("h1", "hero-title", "");
        document.push("p", "static copy", []);
        document.push_bound("span", "  ", "");
        let search = document.push_bound("input", "search", "");

        let bindings = discover_bindings(&document, "data-i18n");
        assert_eq!(
            bindings,
            vec![
                Binding { element: title, key: "hero-title".into(), kind: ElementKind::Content },
                Binding { element: search, key: "search".into(), kind: ElementKind::Input },
            ]
        );
    }

    #[test]
    fn content_shapes_by_kind_and_line_breaks() {
        assert_eq!(Content::for_element(ElementKind::Input, "A\nB"), Content::Value("A\nB"));
        assert_eq!(
            Content::for_element(ElementKind::Content, "A\n<code>B</code>"),
            Content::Markup("A<br><code>B</code>".into())
        );
        assert_eq!(
            Content::for_element(ElementKind::Content, "<b>plain</b>"),
            Content::Text("<b>plain</b>")
        );
    }

    #[test]
    fn memory_document_tracks_writes_and_classes() {
        let mut document = MemoryDocument::new();
        let button = document.push("button", "EN", [("data-lang", "en")]);
        assert_eq!(document.writes(), 0);

        document.set_class(&button, "active", true);
        assert!(document.has_class(button, "active"));
        document.set_class(&button, "active", false);
        assert!(!document.has_class(button, "active"));

        Content::Markup("A<br>B".into()).apply(&mut document, &button);
        assert_eq!(document.visual_lines(button), vec!["A", "B"]);
        assert_eq!(document.text(&button), "AB");
        assert_eq!(document.writes(), 3);
        assert_eq!(document.tag_name(&button), "BUTTON");
    }
}
