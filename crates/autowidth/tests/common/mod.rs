#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use autowidth::{AutoWidthOptions, ControllerId, Page};
use css::ComputedStyle;
use dom::{Document, ElementId, SelectionSupport};
use layout::TextMeasurer;

/// Every character advances half the font size: 8px at the default 16px.
pub fn fixed_width(text: &str, style: &ComputedStyle) -> f32 {
    text.chars().count() as f32 * style.font_size / 2.0
}

pub struct FixedAdvance;

impl TextMeasurer for FixedAdvance {
    fn measure(&self, text: &str, style: &ComputedStyle) -> f32 {
        fixed_width(text, style)
    }
}

/// Fixed-advance measurer that records every run it is asked to measure.
#[derive(Clone, Default)]
pub struct Spy {
    pub calls: Rc<Cell<usize>>,
    pub texts: Rc<RefCell<Vec<String>>>,
}

impl Spy {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_text(&self) -> Option<String> {
        self.texts.borrow().last().cloned()
    }

    pub fn clear(&self) {
        self.calls.set(0);
        self.texts.borrow_mut().clear();
    }
}

impl TextMeasurer for Spy {
    fn measure(&self, text: &str, style: &ComputedStyle) -> f32 {
        self.calls.set(self.calls.get() + 1);
        self.texts.borrow_mut().push(text.to_string());
        fixed_width(text, style)
    }
}

/// Width the controller should settle on for `text` with the fixed advance
/// at 16px.
pub fn expected_width(text: &str) -> f32 {
    text.chars().count() as f32 * 8.0 + autowidth::WIDTH_BUFFER
}

pub fn add_input(doc: &mut Document, value: &str) -> ElementId {
    let input = doc.create_element("input");
    let body = doc.body();
    doc.append_child(body, input);
    doc.set_value(input, value);
    input
}

pub struct Fixture {
    pub page: Page,
    pub input: ElementId,
    pub spy: Spy,
}

impl Fixture {
    pub fn new(value: &str) -> Self {
        Self::build(SelectionSupport::Native, value, None)
    }

    pub fn build(support: SelectionSupport, value: &str, placeholder: Option<&str>) -> Self {
        let mut doc = Document::with_selection_support(support);
        let input = add_input(&mut doc, value);
        if let Some(p) = placeholder {
            doc.set_attribute(input, "placeholder", p);
        }
        let spy = Spy::default();
        let page = Page::new(doc, Box::new(spy.clone()));
        Self { page, input, spy }
    }

    pub fn attach(&mut self, options: AutoWidthOptions) -> ControllerId {
        self.page.attach(self.input, options)
    }

    pub fn style_width(&self) -> Option<String> {
        self.page
            .document()
            .element(self.input)?
            .style_property("width")
            .map(str::to_string)
    }
}
