//! Box widths of text-only inline elements, the way script reads them.

use css::{ComputedStyle, Display, computed_style};
use dom::{Document, ElementId};

use crate::TextMeasurer;
use crate::run::text_run_width;

/// Content width plus horizontal padding. An explicit `width` replaces the
/// text's shrink-to-fit width.
fn border_box_width(
    doc: &Document,
    id: ElementId,
    style: &ComputedStyle,
    measurer: &dyn TextMeasurer,
) -> f32 {
    let content = match style.width {
        Some(px) => px,
        None => {
            let text = doc.text_content(id).unwrap_or("");
            text_run_width(measurer, text, style)
        }
    };
    content + style.horizontal_padding()
}

/// Rendered width rounded to whole px. `0` for elements that are missing,
/// not connected to the document or `display: none`.
pub fn offset_width(doc: &Document, id: ElementId, measurer: &dyn TextMeasurer) -> f32 {
    if !doc.is_connected(id) {
        return 0.0;
    }
    let Some(style) = computed_style(doc, id) else {
        return 0.0;
    };
    if style.display == Display::None {
        return 0.0;
    }
    border_box_width(doc, id, &style, measurer).round()
}

/// Content plus padding width rounded to whole px, computed whether or not
/// the element is connected. `0` for missing or `display: none` elements.
pub fn client_width(doc: &Document, id: ElementId, measurer: &dyn TextMeasurer) -> f32 {
    let Some(style) = computed_style(doc, id) else {
        return 0.0;
    };
    if style.display == Display::None {
        return 0.0;
    }
    border_box_width(doc, id, &style, measurer).round()
}
