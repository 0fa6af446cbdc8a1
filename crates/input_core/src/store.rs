//! The platform's editing model for single-line inputs.
//!
//! Value, caret and selection per element, and the edits a key press makes
//! to them. Offsets are byte indices kept on char boundaries. Nothing here
//! knows about layout or events: the DOM arena applies a key press through
//! this store once key-down listeners have run.

use crate::selection::SelectionRange;
use crate::state::InputState;
use crate::text::{clamp_to_char_boundary, filter_single_line, next_cursor_boundary, prev_cursor_boundary};
use core_types::ElementId;
use std::collections::HashMap;

/// Editing state of every input in a document.
///
/// # Example
///
/// ```
/// use core_types::ElementId;
/// use input_core::InputValueStore;
///
/// let mut store = InputValueStore::new();
/// let id = ElementId(1);
///
/// store.set(id, "hello".to_string());
/// store.set_selection(id, 1, 4);
/// store.backspace(id);
///
/// assert_eq!(store.get(id), Some("ho"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct InputValueStore {
    inputs: HashMap<ElementId, InputState>,
}

#[derive(Clone, Copy)]
enum Erase {
    Backward,
    Forward,
}

impl InputValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, id: ElementId) -> bool {
        self.inputs.contains_key(&id)
    }

    pub fn get(&self, id: ElementId) -> Option<&str> {
        self.inputs.get(&id).map(|s| s.value.as_str())
    }

    /// Caret byte index.
    pub fn caret(&self, id: ElementId) -> Option<usize> {
        self.inputs
            .get(&id)
            .map(|s| clamp_to_char_boundary(&s.value, s.caret))
    }

    /// The selection, collapsed to the caret when nothing is selected.
    pub fn selection(&self, id: ElementId) -> Option<SelectionRange> {
        let st = self.inputs.get(&id)?;
        Some(
            st.selected()
                .unwrap_or_else(|| SelectionRange::caret(clamp_to_char_boundary(&st.value, st.caret))),
        )
    }

    /// `0` for unknown inputs.
    pub fn value_revision(&self, id: ElementId) -> u64 {
        self.inputs.get(&id).map_or(0, |s| s.value_rev)
    }

    /// Replace the value as script would: caret to the end, selection gone.
    pub fn set(&mut self, id: ElementId, value: String) {
        let rev = self.value_revision(id).wrapping_add(1);
        let st = self.inputs.entry(id).or_default();
        *st = InputState::with_value(value);
        st.value_rev = rev;
    }

    /// Register an input with `initial` unless it is already known.
    pub fn ensure_initial(&mut self, id: ElementId, initial: String) {
        self.inputs
            .entry(id)
            .or_insert_with(|| InputState::with_value(initial));
    }

    /// Focus keeps the selection.
    pub fn focus(&mut self, id: ElementId) {
        if let Some(st) = self.inputs.get_mut(&id) {
            st.normalize();
        }
    }

    /// Blur collapses the selection to the caret.
    pub fn blur(&mut self, id: ElementId) {
        if let Some(st) = self.inputs.get_mut(&id) {
            st.normalize();
            st.selection_anchor = None;
        }
    }

    /// Type `text` at the caret, replacing the selection. Line breaks are
    /// dropped.
    pub fn insert_text(&mut self, id: ElementId, text: &str) {
        let text = filter_single_line(text);
        if text.is_empty() {
            return;
        }
        let st = self.inputs.entry(id).or_default();
        st.normalize();
        let range = st.selected().unwrap_or(SelectionRange::caret(st.caret));
        st.replace(range, &text);
    }

    /// Erase the selection, or else the character before the caret.
    pub fn backspace(&mut self, id: ElementId) {
        self.erase(id, Erase::Backward);
    }

    /// Erase the selection, or else the character after the caret.
    pub fn delete(&mut self, id: ElementId) {
        self.erase(id, Erase::Forward);
    }

    fn erase(&mut self, id: ElementId, direction: Erase) {
        let Some(st) = self.inputs.get_mut(&id) else {
            return;
        };
        st.normalize();

        let range = match (st.selected(), direction) {
            (Some(selection), _) => selection,
            (None, Erase::Backward) if st.caret > 0 => {
                SelectionRange::new(prev_cursor_boundary(&st.value, st.caret), st.caret)
            }
            (None, Erase::Forward) if st.caret < st.value.len() => {
                SelectionRange::new(st.caret, next_cursor_boundary(&st.value, st.caret))
            }
            // nothing to erase on that side
            (None, _) => {
                st.selection_anchor = None;
                return;
            }
        };
        st.replace(range, "");
    }

    /// Select `start..end` with the caret at `end`.
    pub fn set_selection(&mut self, id: ElementId, start: usize, end: usize) {
        let st = self.inputs.entry(id).or_default();
        let start = clamp_to_char_boundary(&st.value, start);
        let end = clamp_to_char_boundary(&st.value, end);
        st.selection_anchor = (start != end).then_some(start);
        st.caret = end;
    }

    pub fn select_all(&mut self, id: ElementId) {
        let st = self.inputs.entry(id).or_default();
        st.selection_anchor = (!st.value.is_empty()).then_some(0);
        st.caret = st.value.len();
    }
}
