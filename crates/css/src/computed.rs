use crate::cascade::{cascaded_declarations, document_stylesheet};
use crate::values::{Display, Position, TextTransform, WhiteSpace, parse_color, parse_px};
use dom::{Document, ElementId};

/// Resolved style of one element: every property has a concrete value.
#[derive(Clone, Debug, PartialEq)]
pub struct ComputedStyle {
    /// Inherited. Initial: black.
    pub color: (u8, u8, u8, u8),
    /// Inherited. Initial: `sans-serif`.
    pub font_family: String,
    /// Inherited, in px. Initial: 16px.
    pub font_size: f32,
    /// Inherited. Initial: 400.
    pub font_weight: u16,
    /// Inherited. `None` is `normal`.
    pub letter_spacing: Option<f32>,
    pub text_transform: TextTransform,
    pub white_space: WhiteSpace,

    pub display: Display,
    pub position: Position,
    /// `None` is `auto`.
    pub top: Option<f32>,
    pub left: Option<f32>,
    pub width: Option<f32>,
    pub padding_top: f32,
    pub padding_right: f32,
    pub padding_bottom: f32,
    pub padding_left: f32,
}

impl ComputedStyle {
    /// Every property name `get` resolves, in serialization order.
    pub const PROPERTIES: &'static [&'static str] = &[
        "color",
        "font-family",
        "font-size",
        "font-weight",
        "letter-spacing",
        "text-transform",
        "white-space",
        "display",
        "position",
        "top",
        "left",
        "width",
        "padding-top",
        "padding-right",
        "padding-bottom",
        "padding-left",
    ];

    pub fn initial() -> Self {
        ComputedStyle {
            color: (0, 0, 0, 255),
            font_family: "sans-serif".to_string(),
            font_size: 16.0,
            font_weight: 400,
            letter_spacing: None,
            text_transform: TextTransform::None,
            white_space: WhiteSpace::Normal,
            display: Display::Inline,
            position: Position::Static,
            top: None,
            left: None,
            width: None,
            padding_top: 0.0,
            padding_right: 0.0,
            padding_bottom: 0.0,
            padding_left: 0.0,
        }
    }

    /// The resolved value of `property` as a string, the way a
    /// computed-style getter reports it. `None` for unknown properties.
    pub fn get(&self, property: &str) -> Option<String> {
        let px = |v: f32| format!("{v}px");
        let px_or_auto = |v: Option<f32>| v.map_or_else(|| "auto".to_string(), px);

        let value = match property.to_ascii_lowercase().as_str() {
            "color" => {
                let (r, g, b, a) = self.color;
                if a == 255 {
                    format!("rgb({r}, {g}, {b})")
                } else {
                    format!("rgba({r}, {g}, {b}, {})", f32::from(a) / 255.0)
                }
            }
            "font-family" => self.font_family.clone(),
            "font-size" => px(self.font_size),
            "font-weight" => self.font_weight.to_string(),
            "letter-spacing" => self
                .letter_spacing
                .map_or_else(|| "normal".to_string(), px),
            "text-transform" => self.text_transform.as_str().to_string(),
            "white-space" => self.white_space.as_str().to_string(),
            "display" => self.display.as_str().to_string(),
            "position" => self.position.as_str().to_string(),
            "top" => px_or_auto(self.top),
            "left" => px_or_auto(self.left),
            "width" => px_or_auto(self.width),
            "padding-top" => px(self.padding_top),
            "padding-right" => px(self.padding_right),
            "padding-bottom" => px(self.padding_bottom),
            "padding-left" => px(self.padding_left),
            _ => return None,
        };
        Some(value)
    }

    /// `(property, resolved value)` for every property.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, String)> + '_ {
        Self::PROPERTIES
            .iter()
            .filter_map(move |p| self.get(p).map(|v| (*p, v)))
    }

    pub fn horizontal_padding(&self) -> f32 {
        self.padding_left + self.padding_right
    }
}

/// Compute the final, inherited style for an element, given its cascaded
/// declarations and an optional parent computed style.
///
/// Unsupported properties and unparsable values are ignored, as CSS does.
pub fn compute_style(
    tag: &str,
    specified: &[(String, String)],
    parent: Option<&ComputedStyle>,
) -> ComputedStyle {
    // 1. Start from initial values
    let mut result = ComputedStyle::initial();
    result.display = default_display_for(tag);

    // 2. Apply inheritance (per property)
    if let Some(p) = parent {
        result.color = p.color;
        result.font_family = p.font_family.clone();
        result.font_size = p.font_size;
        result.font_weight = p.font_weight;
        result.letter_spacing = p.letter_spacing;
        result.text_transform = p.text_transform;
        result.white_space = p.white_space;
    }
    let parent_font_size = parent.map_or(16.0, |p| p.font_size);

    // 3. Apply specified declarations (override inherited/initial)
    for (name, value) in specified {
        let value = value.as_str();
        match name.as_str() {
            "color" => {
                if let Some(rgba) = parse_color(value) {
                    result.color = rgba;
                }
            }
            "font-family" => {
                let family = value.trim();
                if !family.is_empty() {
                    result.font_family = family.to_string();
                }
            }
            "font-size" => {
                if let Some(px) = parse_font_size(value, parent_font_size) {
                    result.font_size = px;
                }
            }
            "font-weight" => {
                if let Some(w) = parse_font_weight(value) {
                    result.font_weight = w;
                }
            }
            "letter-spacing" => {
                if value.trim().eq_ignore_ascii_case("normal") {
                    result.letter_spacing = None;
                } else if let Some(px) = parse_length_or_zero(value) {
                    result.letter_spacing = Some(px);
                }
            }
            "text-transform" => {
                if let Some(t) = TextTransform::parse(value) {
                    result.text_transform = t;
                }
            }
            "white-space" => {
                if let Some(ws) = WhiteSpace::parse(value) {
                    result.white_space = ws;
                }
            }
            "display" => {
                if let Some(d) = Display::parse(value) {
                    result.display = d;
                }
            }
            "position" => {
                if let Some(p) = Position::parse(value) {
                    result.position = p;
                }
            }
            "top" => apply_auto_length(&mut result.top, value),
            "left" => apply_auto_length(&mut result.left, value),
            "width" => {
                // negative widths are invalid and ignored
                if value.trim().eq_ignore_ascii_case("auto") {
                    result.width = None;
                } else if let Some(px) = parse_length_or_zero(value).filter(|px| *px >= 0.0) {
                    result.width = Some(px);
                }
            }
            "padding" => {
                if let Some([t, r, b, l]) = parse_box_shorthand(value) {
                    result.padding_top = t;
                    result.padding_right = r;
                    result.padding_bottom = b;
                    result.padding_left = l;
                }
            }
            "padding-top" => apply_padding(&mut result.padding_top, value),
            "padding-right" => apply_padding(&mut result.padding_right, value),
            "padding-bottom" => apply_padding(&mut result.padding_bottom, value),
            "padding-left" => apply_padding(&mut result.padding_left, value),
            _ => {
                // unsupported property → ignored
            }
        }
    }

    result
}

/// Computed style of `id`, resolving inheritance from the document root
/// down and the cascade of the document's `<style>` elements.
pub fn computed_style(doc: &Document, id: ElementId) -> Option<ComputedStyle> {
    doc.element(id)?;

    let mut chain = vec![id];
    while let Some(parent) = chain
        .last()
        .and_then(|cur| doc.element(*cur))
        .and_then(|el| el.parent())
    {
        chain.push(parent);
    }

    let sheet = document_stylesheet(doc);
    let mut style: Option<ComputedStyle> = None;
    for cur in chain.iter().rev() {
        let el = doc.element(*cur)?;
        let specified = cascaded_declarations(el, &sheet);
        style = Some(compute_style(&el.tag, &specified, style.as_ref()));
    }
    style
}

fn default_display_for(tag: &str) -> Display {
    match tag.to_ascii_lowercase().as_str() {
        "html" | "body" | "div" | "p" | "form" => Display::Block,
        "input" | "button" | "select" | "textarea" => Display::InlineBlock,
        "style" | "script" | "head" => Display::None,
        _ => Display::Inline,
    }
}

fn parse_length_or_zero(value: &str) -> Option<f32> {
    if value.trim() == "0" {
        return Some(0.0);
    }
    parse_px(value)
}

fn parse_font_size(value: &str, parent_px: f32) -> Option<f32> {
    let v = value.trim();
    if let Some(em) = v.strip_suffix("em") {
        let factor = em.trim().parse::<f32>().ok()?;
        return (factor.is_finite() && factor > 0.0).then_some(parent_px * factor);
    }
    parse_px(v).filter(|px| *px > 0.0)
}

fn parse_font_weight(value: &str) -> Option<u16> {
    match value.trim().to_ascii_lowercase().as_str() {
        "normal" => Some(400),
        "bold" => Some(700),
        other => other.parse::<u16>().ok().filter(|w| (1..=1000).contains(w)),
    }
}

fn apply_auto_length(slot: &mut Option<f32>, value: &str) {
    if value.trim().eq_ignore_ascii_case("auto") {
        *slot = None;
    } else if let Some(px) = parse_length_or_zero(value) {
        *slot = Some(px);
    }
}

fn apply_padding(slot: &mut f32, value: &str) {
    // negative padding is invalid → ignore gracefully
    if let Some(px) = parse_length_or_zero(value).filter(|px| *px >= 0.0) {
        *slot = px;
    }
}

// "1px", "1px 2px", "1px 2px 3px", "1px 2px 3px 4px" → [top, right, bottom, left]
fn parse_box_shorthand(value: &str) -> Option<[f32; 4]> {
    let parts = value
        .split_whitespace()
        .map(|p| parse_length_or_zero(p).filter(|px| *px >= 0.0))
        .collect::<Option<Vec<_>>>()?;
    match parts.as_slice() {
        [a] => Some([*a, *a, *a, *a]),
        [v, h] => Some([*v, *h, *v, *h]),
        [t, h, b] => Some([*t, *h, *b, *h]),
        [t, r, b, l] => Some([*t, *r, *b, *l]),
        _ => None,
    }
}
