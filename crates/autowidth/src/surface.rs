//! The hidden element text is measured in.

use std::cell::Cell;

use css::{StyleValue, set_css};
use dom::{Document, ElementId};

/// Inline style of the surface: off-screen, unpadded, spaces kept verbatim.
fn surface_style() -> [(&'static str, StyleValue); 6] {
    [
        ("position", "absolute".into()),
        ("top", StyleValue::Number(-99999.0)),
        ("left", StyleValue::Number(-99999.0)),
        ("width", "auto".into()),
        ("padding", StyleValue::Number(0.0)),
        ("white-space", "pre".into()),
    ]
}

/// One off-screen `span` shared by every controller on a page.
///
/// Created on the first measurement that misses the cache, then reused for
/// the page's lifetime. Measuring is a set-text / copy-font / read-width
/// sequence on this one element, so it must never nest; [`MeasureSurface::begin`]
/// asserts that in debug builds. The `Cell`s keep the type `!Sync`, and
/// pages hand it out as `Rc<MeasureSurface>`, which is `!Send`.
#[derive(Debug, Default)]
pub struct MeasureSurface {
    element: Cell<Option<ElementId>>,
    in_use: Cell<bool>,
    measurements: Cell<u64>,
}

/// Marks the surface busy until dropped.
pub struct SurfaceGuard<'a> {
    surface: &'a MeasureSurface,
    element: ElementId,
}

impl SurfaceGuard<'_> {
    pub fn element(&self) -> ElementId {
        self.element
    }
}

impl Drop for SurfaceGuard<'_> {
    fn drop(&mut self) {
        self.surface.in_use.set(false);
    }
}

impl MeasureSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The surface element, if it has been created.
    pub fn element(&self) -> Option<ElementId> {
        self.element.get()
    }

    /// Number of measurements run on the surface.
    pub fn measurements(&self) -> u64 {
        self.measurements.get()
    }

    /// Start a measurement, creating the element on first use.
    pub fn begin<'a>(&'a self, doc: &mut Document) -> SurfaceGuard<'a> {
        debug_assert!(
            !self.in_use.get(),
            "measurement surface re-entered during a measurement"
        );
        self.in_use.set(true);
        self.measurements.set(self.measurements.get() + 1);

        let element = match self.element.get().filter(|id| doc.contains(*id)) {
            Some(id) => id,
            None => self.create(doc),
        };
        SurfaceGuard {
            surface: self,
            element,
        }
    }

    fn create(&self, doc: &mut Document) -> ElementId {
        let span = doc.create_element("span");
        set_css(doc, span, &surface_style());
        let body = doc.body();
        doc.append_child(body, span);
        self.element.set(Some(span));
        log::debug!(target: "autowidth.measure", "created measurement surface {span:?}");
        span
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_once_with_offscreen_style() {
        let mut doc = Document::new();
        let surface = MeasureSurface::new();
        assert_eq!(surface.element(), None);

        let first = surface.begin(&mut doc).element();
        let second = surface.begin(&mut doc).element();
        assert_eq!(first, second);
        assert_eq!(surface.measurements(), 2);
        assert!(doc.is_connected(first));

        let el = doc.element(first).unwrap();
        assert!(el.is("span"));
        assert_eq!(el.style_property("position"), Some("absolute"));
        assert_eq!(el.style_property("top"), Some("-99999px"));
        assert_eq!(el.style_property("left"), Some("-99999px"));
        assert_eq!(el.style_property("width"), Some("auto"));
        assert_eq!(el.style_property("padding"), Some("0px"));
        assert_eq!(el.style_property("white-space"), Some("pre"));
    }

    #[test]
    fn guard_releases_on_drop() {
        let mut doc = Document::new();
        let surface = MeasureSurface::new();
        {
            let _guard = surface.begin(&mut doc);
            assert!(surface.in_use.get());
        }
        assert!(!surface.in_use.get());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "re-entered")]
    fn nested_measurement_panics_in_debug() {
        let mut doc = Document::new();
        let surface = MeasureSurface::new();
        let _outer = surface.begin(&mut doc);
        let _inner = surface.begin(&mut doc);
    }
}
