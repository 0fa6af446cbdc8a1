use std::cell::RefCell;
use std::collections::HashMap;

use css::ComputedStyle;
use egui::{Color32, Context, FontFamily, FontId, RawInput};
use layout::TextMeasurer;

/// `egui`-backed adapter for measuring text runs.
///
/// egui ships one proportional and one monospace family and no weights, so
/// `font-family` picks between those two and `font-weight` does not change
/// advances.
pub struct EguiTextMeasurer {
    ctx: Context,
    space_width_cache: RefCell<HashMap<(u32, bool), f32>>,
}

impl EguiTextMeasurer {
    pub fn new(ctx: &Context) -> Self {
        Self {
            ctx: ctx.clone(),
            space_width_cache: RefCell::new(HashMap::new()),
        }
    }

    /// A measurer with its own context. Runs one empty pass so the font
    /// atlas is loaded.
    pub fn headless() -> Self {
        let ctx = Context::default();
        let _ = ctx.run(RawInput::default(), |_| {});
        Self::new(&ctx)
    }

    pub fn context(&self) -> &Context {
        &self.ctx
    }

    fn layout_width(&self, text: &str, font_id: &FontId) -> f32 {
        // `Color32` does not affect text metrics
        self.ctx.fonts(|f| {
            f.layout_no_wrap(text.to_owned(), font_id.clone(), Color32::BLACK)
                .rect
                .width()
        })
    }

    /// Advance of one space at this size, cached per (px, family).
    fn space_width(&self, font_px: f32, monospace: bool, font_id: &FontId) -> f32 {
        let key = (font_px.round().max(0.0) as u32, monospace);
        if let Some(w) = self.space_width_cache.borrow().get(&key) {
            return *w;
        }

        let usable = |w: f32| w.is_finite() && w > 0.0;
        let alone = self.layout_width("\u{00A0}", font_id);
        let w = if usable(alone) {
            alone
        } else {
            let between = self.layout_width("x\u{00A0}x", font_id) - self.layout_width("xx", font_id);
            if usable(between) {
                between
            } else {
                (font_px / 3.0).max(1.0)
            }
        };

        self.space_width_cache.borrow_mut().insert(key, w);
        w
    }
}

fn is_monospace(font_family: &str) -> bool {
    font_family
        .split(',')
        .map(|f| f.trim().trim_matches(|c| c == '"' || c == '\''))
        .any(|f| {
            f.eq_ignore_ascii_case("monospace")
                || f.eq_ignore_ascii_case("courier")
                || f.eq_ignore_ascii_case("courier new")
        })
}

impl TextMeasurer for EguiTextMeasurer {
    fn measure(&self, text: &str, style: &ComputedStyle) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        let font_px = style.font_size;
        let monospace = is_monospace(&style.font_family);
        let family = if monospace {
            FontFamily::Monospace
        } else {
            FontFamily::Proportional
        };
        let font_id = FontId::new(font_px, family);

        // Leading and trailing spaces are not part of egui's glyph rect, so
        // they are measured per space and the core is laid out on its own.
        let core = text.trim_matches(' ');
        let edge_spaces = text.chars().count() - core.chars().count();
        let spaces = if edge_spaces > 0 {
            edge_spaces as f32 * self.space_width(font_px, monospace, &font_id)
        } else {
            0.0
        };
        if core.is_empty() {
            return spaces;
        }

        self.layout_width(core, &font_id) + spaces
    }
}
