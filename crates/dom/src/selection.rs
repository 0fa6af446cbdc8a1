//! Reading an input's selection.
//!
//! Platforms expose the selection in one of two ways: a native
//! start/end pair on the input, or an older document-level text range that
//! only reflects the *focused* element. [`Document::input_selection`] tries
//! them in that order and names the reason when neither works.

use crate::Document;
use core_types::ElementId;
use input_core::{
    SelectionProbe, SelectionRange, SelectionUnavailable, clamp_to_char_boundary,
    next_cursor_boundary, prev_cursor_boundary,
};

/// Which selection API the platform offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionSupport {
    /// `selectionStart`/`selectionEnd` on inputs.
    Native,
    /// Only a document-level text range over the focused element.
    LegacyTextRange,
    Unsupported,
}

/// A document-level text range over part of one element's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegacyTextRange {
    owner: ElementId,
    start: usize,
    end: usize,
}

impl LegacyTextRange {
    pub fn text<'a>(&self, doc: &'a Document) -> &'a str {
        doc.value(self.owner).get(self.start..self.end).unwrap_or("")
    }

    /// Move the start by `delta` characters, never past the end or before 0.
    pub fn move_start(&mut self, doc: &Document, delta: isize) {
        let value = doc.value(self.owner);
        let mut start = clamp_to_char_boundary(value, self.start);
        if delta < 0 {
            for _ in 0..delta.unsigned_abs() {
                if start == 0 {
                    break;
                }
                start = prev_cursor_boundary(value, start);
            }
        } else {
            for _ in 0..delta.unsigned_abs() {
                if start >= self.end {
                    break;
                }
                start = next_cursor_boundary(value, start);
            }
        }
        self.start = start.min(self.end);
    }
}

impl Document {
    /// Native selection of an input, if the platform exposes one.
    pub fn selection_range(&self, id: ElementId) -> Option<SelectionRange> {
        match self.selection_support {
            SelectionSupport::Native => self.input_values.selection(id),
            _ => None,
        }
    }

    /// Set an input's selection (what a user drag or shift-arrow would do).
    pub fn set_selection_range(&mut self, id: ElementId, start: usize, end: usize) {
        if self.input_values.has(id) {
            self.input_values.set_selection(id, start, end);
        }
    }

    pub fn select_all(&mut self, id: ElementId) {
        if self.input_values.has(id) {
            self.input_values.select_all(id);
        }
    }

    /// The current document text range, available only on legacy platforms
    /// and only over the focused input.
    pub fn create_legacy_text_range(&self) -> Option<LegacyTextRange> {
        if self.selection_support != SelectionSupport::LegacyTextRange {
            return None;
        }
        let owner = self.focused?;
        let sel = self.input_values.selection(owner)?;
        Some(LegacyTextRange {
            owner,
            start: sel.start,
            end: sel.end,
        })
    }

    /// Probe the selection of `id`: native API first, then the legacy text
    /// range. The legacy path focuses the input first, as that API only
    /// sees the focused element.
    pub fn input_selection(&mut self, id: ElementId) -> SelectionProbe {
        if !self.input_values.has(id) {
            return SelectionProbe::Unavailable(SelectionUnavailable::NotATextControl);
        }

        match self.selection_support {
            SelectionSupport::Native => match self.selection_range(id) {
                Some(range) => SelectionProbe::Native(range),
                None => SelectionProbe::Unavailable(SelectionUnavailable::NotATextControl),
            },
            SelectionSupport::LegacyTextRange => {
                self.focus(id);
                let Some(mut range) = self.create_legacy_text_range() else {
                    return SelectionProbe::Unavailable(SelectionUnavailable::NoSelectionApi);
                };
                let selected = range.text(self).len();
                let chars = self.value(id).chars().count();
                range.move_start(self, -(chars as isize));
                let start = range.text(self).len() - selected;
                SelectionProbe::Legacy(SelectionRange::from_start_len(start, selected))
            }
            SelectionSupport::Unsupported => {
                SelectionProbe::Unavailable(SelectionUnavailable::NoSelectionApi)
            }
        }
    }
}
