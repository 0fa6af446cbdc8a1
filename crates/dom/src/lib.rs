//! Headless element arena.
//!
//! A [`Document`] owns a flat arena of elements addressed by
//! [`ElementId`], plus the per-document state a page needs to host form
//! controls: input values and selections, focus, inline styles, style sheet
//! sources and signal subscriptions.
//!
//! Everything here is single-threaded: a document is mutated from one call
//! stack, one event at a time.

mod document;
mod editing;
mod element;
mod events;
mod selection;

pub use core_types::{ElementId, ListenerId, SignalKind};
pub use document::Document;
pub use element::Element;
pub use events::InputEvent;
pub use selection::{LegacyTextRange, SelectionSupport};
