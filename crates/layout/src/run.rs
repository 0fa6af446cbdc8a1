//! Text-run preparation: what the measurer actually sees for a text box.

use std::borrow::Cow;

use css::{ComputedStyle, TextTransform, WhiteSpace};

use crate::TextMeasurer;

/// Apply `text-transform`.
pub fn transform_text(text: &str, transform: TextTransform) -> Cow<'_, str> {
    match transform {
        TextTransform::None => Cow::Borrowed(text),
        TextTransform::Uppercase => Cow::Owned(text.to_uppercase()),
        TextTransform::Lowercase => Cow::Owned(text.to_lowercase()),
        TextTransform::Capitalize => {
            let mut out = String::with_capacity(text.len());
            let mut at_word_start = true;
            for ch in text.chars() {
                if at_word_start && ch.is_alphanumeric() {
                    out.extend(ch.to_uppercase());
                } else {
                    out.push(ch);
                }
                at_word_start = ch.is_whitespace();
            }
            Cow::Owned(out)
        }
    }
}

/// Apply `white-space`: `pre` keeps the text verbatim, everything else
/// collapses whitespace runs to one space and trims both ends.
pub fn collapse_white_space(text: &str, white_space: WhiteSpace) -> Cow<'_, str> {
    match white_space {
        WhiteSpace::Pre => Cow::Borrowed(text),
        WhiteSpace::Normal | WhiteSpace::Nowrap => {
            let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
            if collapsed == text {
                Cow::Borrowed(text)
            } else {
                Cow::Owned(collapsed)
            }
        }
    }
}

/// The run as it will be rendered: transformed first, then
/// whitespace-processed.
pub fn prepare_text_run<'a>(text: &'a str, style: &ComputedStyle) -> Cow<'a, str> {
    match transform_text(text, style.text_transform) {
        Cow::Borrowed(t) => collapse_white_space(t, style.white_space),
        Cow::Owned(t) => Cow::Owned(collapse_white_space(&t, style.white_space).into_owned()),
    }
}

/// Advance width of `text` styled with `style`, letter-spacing included.
/// Letter-spacing is added after every character, the last one too.
pub fn text_run_width(measurer: &dyn TextMeasurer, text: &str, style: &ComputedStyle) -> f32 {
    let run = prepare_text_run(text, style);
    if run.is_empty() {
        return 0.0;
    }
    let spacing = style.letter_spacing.unwrap_or(0.0) * run.chars().count() as f32;
    (measurer.measure(&run, style) + spacing).max(0.0)
}
