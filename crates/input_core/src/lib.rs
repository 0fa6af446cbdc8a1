//! # input_core
//!
//! UI-agnostic input editing/state layer.
//!
//! This crate provides the building blocks shared by the DOM arena and the
//! auto-width behavior:
//! - [`InputValueStore`]: central store for input values, caret positions and selections
//! - [`SelectionRange`]: a text selection with start/end byte offsets
//! - [`KeyDescriptor`], [`Modifiers`], [`Keymap`]: key-down descriptors and the
//!   keycode → character table used to guess what a keystroke will insert
//! - [`ValuePredictor`]: estimates the value an input will hold once a pending
//!   keystroke has been applied
//!
//! ## Design Principles
//!
//! This crate does not depend on any graphics framework, layout, or the DOM
//! arena. Integration layers translate their element handles into
//! [`core_types::ElementId`] at call boundaries.

mod keys;
mod predict;
mod selection;
mod state;
mod store;
mod text;

pub use keys::{KeyDescriptor, Keymap, Modifiers, UsKeymap, key_codes};
pub use predict::{
    KeystrokePredictor, Prediction, PredictionKind, SelectionProbe, SelectionUnavailable,
    UnchangedReason, ValuePredictor,
};
pub use selection::SelectionRange;
pub use store::InputValueStore;

pub use text::{
    clamp_to_char_boundary, filter_single_line, next_cursor_boundary, prev_cursor_boundary,
    remove_range,
};
