use crate::element::Element;
use crate::events::Listener;
use crate::selection::SelectionSupport;
use core_types::ElementId;
use input_core::InputValueStore;

/// An element arena rooted at `<html>` with a `<body>`.
#[derive(Debug)]
pub struct Document {
    elements: Vec<Element>,
    root: ElementId,
    body: ElementId,

    pub(crate) input_values: InputValueStore,
    pub(crate) focused: Option<ElementId>,
    pub(crate) selection_support: SelectionSupport,

    pub(crate) listeners: Vec<Listener>,
    pub(crate) next_listener: u64,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut doc = Self {
            elements: Vec::new(),
            root: ElementId(0),
            body: ElementId(0),
            input_values: InputValueStore::new(),
            focused: None,
            selection_support: SelectionSupport::Native,
            listeners: Vec::new(),
            next_listener: 0,
        };
        doc.root = doc.create_element("html");
        doc.body = doc.create_element("body");
        doc.append_child(doc.root, doc.body);
        doc
    }

    /// A document whose inputs expose selections through `support` only.
    pub fn with_selection_support(support: SelectionSupport) -> Self {
        let mut doc = Self::new();
        doc.selection_support = support;
        doc
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn body(&self) -> ElementId {
        self.body
    }

    pub fn selection_support(&self) -> SelectionSupport {
        self.selection_support
    }

    /// Create a detached element. `input` elements get an empty value.
    pub fn create_element(&mut self, tag: &str) -> ElementId {
        let id = ElementId(self.elements.len() as u32);
        let element = Element::new(tag);
        if element.is("input") {
            self.input_values.ensure_initial(id, String::new());
        }
        self.elements.push(element);
        id
    }

    /// Move `child` under `parent`, detaching it from any previous parent.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) {
        if parent == child || !self.contains(parent) || !self.contains(child) {
            return;
        }
        if self.is_ancestor(child, parent) {
            return;
        }
        if let Some(old) = self.elements[child.0 as usize].parent.take() {
            self.elements[old.0 as usize].children.retain(|c| *c != child);
        }
        self.elements[parent.0 as usize].children.push(child);
        self.elements[child.0 as usize].parent = Some(parent);
    }

    pub fn contains(&self, id: ElementId) -> bool {
        (id.0 as usize) < self.elements.len()
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0 as usize)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id.0 as usize)
    }

    /// `true` when `id` is reachable from the document root.
    pub fn is_connected(&self, id: ElementId) -> bool {
        id == self.root || self.is_ancestor(self.root, id)
    }

    fn is_ancestor(&self, ancestor: ElementId, id: ElementId) -> bool {
        let mut cur = self.element(id).and_then(Element::parent);
        while let Some(p) = cur {
            if p == ancestor {
                return true;
            }
            cur = self.element(p).and_then(Element::parent);
        }
        false
    }

    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> {
        self.element(id)?.attr(name)
    }

    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        if let Some(el) = self.element_mut(id) {
            el.set_attr(name, Some(value.to_string()));
        }
    }

    pub fn text_content(&self, id: ElementId) -> Option<&str> {
        self.element(id).map(|el| el.text.as_str())
    }

    pub fn set_text_content(&mut self, id: ElementId, text: &str) {
        if let Some(el) = self.element_mut(id) {
            el.text.clear();
            el.text.push_str(text);
        }
    }

    /// The input's current value; empty for elements without one.
    pub fn value(&self, id: ElementId) -> &str {
        self.input_values.get(id).unwrap_or("")
    }

    /// Replace the value, moving the caret to the end.
    pub fn set_value(&mut self, id: ElementId, value: &str) {
        if self.contains(id) {
            self.input_values.set(id, value.to_string());
        }
    }

    pub fn value_revision(&self, id: ElementId) -> u64 {
        self.input_values.value_revision(id)
    }

    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    pub fn focus(&mut self, id: ElementId) {
        if !self.contains(id) || self.focused == Some(id) {
            return;
        }
        if let Some(prev) = self.focused.take() {
            self.input_values.blur(prev);
        }
        self.input_values.focus(id);
        self.focused = Some(id);
    }

    pub fn blur(&mut self) {
        if let Some(prev) = self.focused.take() {
            self.input_values.blur(prev);
        }
    }

    /// Concatenated text of every connected `<style>` element, in tree order.
    pub fn collect_style_texts(&self, out: &mut String) {
        fn walk(doc: &Document, id: ElementId, out: &mut String) {
            let Some(el) = doc.element(id) else {
                return;
            };
            if el.is("style") {
                out.push_str(&el.text);
                out.push('\n');
            }
            for child in &el.children {
                walk(doc, *child, out);
            }
        }
        walk(self, self.root, out);
    }

    /// Append a `<style>` element with `css` to the body.
    pub fn add_style_sheet(&mut self, css: &str) -> ElementId {
        let style = self.create_element("style");
        self.set_text_content(style, css);
        self.append_child(self.body, style);
        style
    }
}
