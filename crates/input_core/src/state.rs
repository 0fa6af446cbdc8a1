//! Per-input editing state kept by the [`InputValueStore`](crate::InputValueStore).

use crate::selection::SelectionRange;
use crate::text::clamp_to_char_boundary;

#[derive(Clone, Debug, Default)]
pub(crate) struct InputState {
    pub value: String,

    /// Bumped on every edit of `value`.
    pub value_rev: u64,

    /// Byte index into `value`, on a char boundary once normalized.
    pub caret: usize,

    /// With `Some(anchor)` the selection spans anchor..caret in either order.
    pub selection_anchor: Option<usize>,
}

impl InputState {
    pub fn with_value(value: String) -> Self {
        Self {
            caret: value.len(),
            value,
            ..Self::default()
        }
    }

    /// Snap caret and anchor back onto char boundaries.
    pub fn normalize(&mut self) {
        self.caret = clamp_to_char_boundary(&self.value, self.caret);
        self.selection_anchor = self
            .selection_anchor
            .map(|a| clamp_to_char_boundary(&self.value, a));
    }

    /// The non-empty selection, if any.
    pub fn selected(&self) -> Option<SelectionRange> {
        let anchor = clamp_to_char_boundary(&self.value, self.selection_anchor?);
        let caret = clamp_to_char_boundary(&self.value, self.caret);
        (anchor != caret).then(|| SelectionRange::new(anchor, caret))
    }

    /// Replace `range` with `text`, leaving a collapsed caret after it.
    pub fn replace(&mut self, range: SelectionRange, text: &str) {
        self.value.replace_range(range.start..range.end, text);
        self.caret = range.start + text.len();
        self.selection_anchor = None;
        self.value_rev = self.value_rev.wrapping_add(1);
    }
}
