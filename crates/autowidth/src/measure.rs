//! Text width through the shared surface.

use css::{TransferOutcome, transfer_styles};
use dom::{Document, ElementId};
use layout::{TextMeasurer, client_width, offset_width};

use crate::cache::MeasureCache;
use crate::surface::MeasureSurface;

/// Properties copied from the input to the surface before measuring: the
/// ones that change a glyph run's width.
pub const FONT_PROPERTIES: [&str; 5] = [
    "letter-spacing",
    "font-size",
    "font-family",
    "font-weight",
    "text-transform",
];

/// Rendered width of `text` in the font of `font_source`.
///
/// Empty text is `0` without touching the surface. A cache hit is returned
/// as is. Otherwise the text goes into the surface, the input's font is
/// copied over and the surface's offset width is read, falling back to its
/// client width when that is `0`. The cache is only read here.
///
/// Without a `font_source` the surface keeps whatever font it last had.
pub fn measure_width(
    doc: &mut Document,
    measurer: &dyn TextMeasurer,
    surface: &MeasureSurface,
    font_source: Option<ElementId>,
    text: &str,
    cache: Option<&MeasureCache>,
) -> f32 {
    if text.is_empty() {
        return 0.0;
    }
    if let Some(width) = cache.and_then(|c| c.get(text)) {
        log::trace!(target: "autowidth.measure", "cache hit {text:?} -> {width}");
        return width;
    }

    let guard = surface.begin(doc);
    let span = guard.element();
    doc.set_text_content(span, text);

    if let Some(input) = font_source {
        if transfer_styles(doc, input, span, &FONT_PROPERTIES) == TransferOutcome::MissingElement {
            log::debug!(target: "autowidth.measure", "font source {input:?} is gone");
        }
    }

    let offset = offset_width(doc, span, measurer);
    let width = if offset == 0.0 {
        client_width(doc, span, measurer)
    } else {
        offset
    };
    drop(guard);

    log::trace!(target: "autowidth.measure", "measured {text:?} -> {width}");
    width
}
