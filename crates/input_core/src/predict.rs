//! Speculative value prediction for key-down.
//!
//! Key-down fires before the platform applies the keystroke, so the value an
//! input reports at that point is stale. A [`ValuePredictor`] estimates what
//! it will become. The estimate is transient: the next input/key-up signal
//! carries the real value.

use crate::keys::{KeyDescriptor, Keymap, Modifiers, UsKeymap};
use crate::selection::SelectionRange;
use crate::text::{next_cursor_boundary, prev_cursor_boundary, remove_range};

/// Why no selection could be read from the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionUnavailable {
    /// Neither the native selection API nor the legacy text-range query exists.
    NoSelectionApi,
    /// The element holds no editable value.
    NotATextControl,
}

/// Result of asking the platform for the input's selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionProbe {
    Native(SelectionRange),
    /// Read through the legacy text-range query (which focuses the input).
    Legacy(SelectionRange),
    Unavailable(SelectionUnavailable),
}

impl SelectionProbe {
    pub fn range(&self) -> Option<SelectionRange> {
        match self {
            SelectionProbe::Native(r) | SelectionProbe::Legacy(r) => Some(*r),
            SelectionProbe::Unavailable(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PredictionKind {
    RemovedSelection,
    RemovedBeforeCaret,
    RemovedAtCaret,
    Appended(char),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnchangedReason {
    BackspaceAtStart,
    /// Delete/backspace without a readable caret position.
    CaretUnknown,
    NotPrintable,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Prediction {
    Predicted { value: String, kind: PredictionKind },
    Unchanged(UnchangedReason),
}

impl Prediction {
    /// The predicted value, or `current` when the keystroke changes nothing.
    pub fn into_value(self, current: String) -> String {
        match self {
            Prediction::Predicted { value, .. } => value,
            Prediction::Unchanged(_) => current,
        }
    }
}

/// Strategy for predicting the post-keystroke value.
pub trait ValuePredictor {
    /// Predict the value after `key` is applied to `value`.
    ///
    /// `probe_selection` reads the input's selection. It may have side effects
    /// (the legacy query focuses the input), so implementations only call it
    /// when the answer matters.
    fn predict(
        &self,
        value: &str,
        key: KeyDescriptor,
        modifiers: Modifiers,
        probe_selection: &mut dyn FnMut() -> SelectionProbe,
    ) -> Prediction;
}

/// Default predictor: deletion keys honor the selection and caret, printable
/// keys append one character.
///
/// Printable keys always append, whatever the caret position. Repeat keys,
/// IME composition and non-US layouts are not modelled.
#[derive(Clone, Copy, Debug, Default)]
pub struct KeystrokePredictor<K = UsKeymap> {
    keymap: K,
}

impl<K: Keymap> KeystrokePredictor<K> {
    pub fn new(keymap: K) -> Self {
        Self { keymap }
    }

    fn predict_deletion(
        &self,
        value: &str,
        key: KeyDescriptor,
        probe: SelectionProbe,
    ) -> Prediction {
        let Some(selection) = probe.range() else {
            // Without a selection API there is no caret either.
            return Prediction::Unchanged(UnchangedReason::CaretUnknown);
        };

        if !selection.is_empty() {
            return Prediction::Predicted {
                value: remove_range(value, selection.start, selection.end),
                kind: PredictionKind::RemovedSelection,
            };
        }

        let caret = selection.start;
        if key.is_backspace() {
            if caret == 0 {
                return Prediction::Unchanged(UnchangedReason::BackspaceAtStart);
            }
            let prev = prev_cursor_boundary(value, caret);
            return Prediction::Predicted {
                value: remove_range(value, prev, caret),
                kind: PredictionKind::RemovedBeforeCaret,
            };
        }

        let next = next_cursor_boundary(value, caret);
        Prediction::Predicted {
            value: remove_range(value, caret, next),
            kind: PredictionKind::RemovedAtCaret,
        }
    }
}

impl<K: Keymap> ValuePredictor for KeystrokePredictor<K> {
    fn predict(
        &self,
        value: &str,
        key: KeyDescriptor,
        modifiers: Modifiers,
        probe_selection: &mut dyn FnMut() -> SelectionProbe,
    ) -> Prediction {
        if key.is_backspace() || key.is_delete() {
            let probe = probe_selection();
            let prediction = self.predict_deletion(value, key, probe);
            log::trace!(
                target: "input_core.predict",
                "deletion key {} with {probe:?} -> {prediction:?}",
                key.code
            );
            return prediction;
        }

        let Some(ch) = self.keymap.printable_char(key.code) else {
            return Prediction::Unchanged(UnchangedReason::NotPrintable);
        };

        let mut predicted = String::with_capacity(value.len() + ch.len_utf8());
        predicted.push_str(value);
        if modifiers.shift {
            predicted.extend(ch.to_uppercase());
        } else {
            predicted.extend(ch.to_lowercase());
        }

        Prediction::Predicted {
            value: predicted,
            kind: PredictionKind::Appended(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::key_codes;

    fn predict(value: &str, code: u32, modifiers: Modifiers, probe: SelectionProbe) -> Prediction {
        let mut calls = 0;
        let prediction = KeystrokePredictor::<UsKeymap>::default().predict(
            value,
            KeyDescriptor::new(code),
            modifiers,
            &mut || {
                calls += 1;
                probe
            },
        );
        assert!(calls <= 1);
        prediction
    }

    fn native(start: usize, len: usize) -> SelectionProbe {
        SelectionProbe::Native(SelectionRange::from_start_len(start, len))
    }

    #[test]
    fn backspace_at_end_drops_last_char() {
        let p = predict("hello", key_codes::BACKSPACE, Modifiers::NONE, native(5, 0));
        assert_eq!(
            p,
            Prediction::Predicted {
                value: "hell".to_string(),
                kind: PredictionKind::RemovedBeforeCaret,
            }
        );
    }

    #[test]
    fn backspace_mid_value_drops_only_the_char_before_caret() {
        let p = predict("hello", key_codes::BACKSPACE, Modifiers::NONE, native(2, 0));
        assert_eq!(p.into_value(String::new()), "hllo");
    }

    #[test]
    fn either_deletion_key_removes_the_selection() {
        for code in [key_codes::BACKSPACE, key_codes::DELETE] {
            let p = predict("hello", code, Modifiers::NONE, native(1, 3));
            assert_eq!(
                p,
                Prediction::Predicted {
                    value: "ho".to_string(),
                    kind: PredictionKind::RemovedSelection,
                }
            );
        }
    }

    #[test]
    fn delete_removes_char_at_caret() {
        let p = predict("hello", key_codes::DELETE, Modifiers::NONE, native(0, 0));
        assert_eq!(p.into_value(String::new()), "ello");
    }

    #[test]
    fn backspace_at_start_is_unchanged() {
        let p = predict("hello", key_codes::BACKSPACE, Modifiers::NONE, native(0, 0));
        assert_eq!(p, Prediction::Unchanged(UnchangedReason::BackspaceAtStart));
    }

    #[test]
    fn deletion_without_selection_api_is_unchanged() {
        let unavailable = SelectionProbe::Unavailable(SelectionUnavailable::NoSelectionApi);
        for code in [key_codes::BACKSPACE, key_codes::DELETE] {
            let p = predict("hello", code, Modifiers::NONE, unavailable);
            assert_eq!(p, Prediction::Unchanged(UnchangedReason::CaretUnknown));
        }
    }

    #[test]
    fn backspace_keeps_multibyte_chars_whole() {
        let p = predict("a€", key_codes::BACKSPACE, Modifiers::NONE, native(4, 0));
        assert_eq!(p.into_value(String::new()), "a");
    }

    #[test]
    fn printable_key_appends_with_shift_case() {
        let p = predict("ab", 67, Modifiers::SHIFT, native(0, 0));
        assert_eq!(
            p,
            Prediction::Predicted {
                value: "abC".to_string(),
                kind: PredictionKind::Appended('C'),
            }
        );

        let p = predict("ab", 67, Modifiers::NONE, native(0, 0));
        assert_eq!(p.into_value(String::new()), "abc");
    }

    #[test]
    fn printable_key_never_probes_selection() {
        let mut probed = false;
        let _ = KeystrokePredictor::<UsKeymap>::default().predict(
            "ab",
            KeyDescriptor::new(67),
            Modifiers::NONE,
            &mut || {
                probed = true;
                native(0, 0)
            },
        );
        assert!(!probed);
    }

    #[test]
    fn non_printable_key_is_unchanged() {
        let p = predict("ab", key_codes::ARROW_LEFT, Modifiers::NONE, native(0, 0));
        assert_eq!(p, Prediction::Unchanged(UnchangedReason::NotPrintable));
        assert_eq!(p.into_value("ab".to_string()), "ab");
    }

    struct DigitsOnly;

    impl Keymap for DigitsOnly {
        fn printable_char(&self, code: u32) -> Option<char> {
            char::from_digit(code.checked_sub(48)?, 10)
        }
    }

    #[test]
    fn keymap_is_pluggable() {
        let predictor = KeystrokePredictor::new(DigitsOnly);
        let p = predictor.predict("1", KeyDescriptor::new(50), Modifiers::NONE, &mut || {
            native(0, 0)
        });
        assert_eq!(p.into_value(String::new()), "12");

        let p = predictor.predict("1", KeyDescriptor::new(67), Modifiers::NONE, &mut || {
            native(0, 0)
        });
        assert_eq!(p, Prediction::Unchanged(UnchangedReason::NotPrintable));
    }
}
