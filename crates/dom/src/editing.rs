//! The platform's default action for a key press on a text input.
//!
//! Hosts run this *after* key-down listeners, mirroring how a browser only
//! updates the value once the key-down event has been dispatched.

use crate::Document;
use core_types::ElementId;
use input_core::{KeyDescriptor, Keymap, Modifiers, key_codes};

impl Document {
    /// Apply `key` to the input's value. Returns `true` when the value changed.
    ///
    /// Unlike a key-down predictor, this inserts at the caret and replaces the
    /// selection. Meta/ctrl/alt chords insert nothing; backspace and delete
    /// still edit with a chord held.
    pub fn apply_key(
        &mut self,
        id: ElementId,
        key: KeyDescriptor,
        modifiers: Modifiers,
        keymap: &dyn Keymap,
    ) -> bool {
        if !self.input_values.has(id) {
            return false;
        }
        let before = self.input_values.value_revision(id);

        match key.code {
            key_codes::BACKSPACE => self.input_values.backspace(id),
            key_codes::DELETE => self.input_values.delete(id),
            key_codes::ENTER => {}
            _ if modifiers.meta || modifiers.ctrl || modifiers.alt => {}
            code => {
                if let Some(ch) = keymap.printable_char(code) {
                    let text: String = if modifiers.shift {
                        ch.to_uppercase().collect()
                    } else {
                        ch.to_lowercase().collect()
                    };
                    self.input_values.insert_text(id, &text);
                }
            }
        }

        let changed = self.input_values.value_revision(id) != before;
        if changed {
            log::trace!(target: "dom.editing", "key {} edited {:?}", key.code, id);
        }
        changed
    }
}
