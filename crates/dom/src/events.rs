//! Signal subscriptions and the events delivered through them.
//!
//! The document only records *who* listens to *what*. Delivering an event is
//! up to the host that owns the listeners: it asks for the subscribers of
//! `(target, kind)` and calls them itself, which keeps the document free of
//! callbacks that would need to borrow it back.

use crate::Document;
use core_types::{ElementId, ListenerId, SignalKind};
use input_core::{KeyDescriptor, Modifiers};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Listener {
    pub id: ListenerId,
    pub target: ElementId,
    pub kind: SignalKind,
}

/// An input-lifecycle event aimed at one element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputEvent {
    pub kind: SignalKind,
    pub target: ElementId,
    /// Present on key-down/key-up.
    pub key: Option<KeyDescriptor>,
    pub modifiers: Modifiers,
}

impl InputEvent {
    pub fn blur(target: ElementId) -> Self {
        Self {
            kind: SignalKind::Blur,
            target,
            key: None,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn input(target: ElementId) -> Self {
        Self {
            kind: SignalKind::Input,
            target,
            key: None,
            modifiers: Modifiers::NONE,
        }
    }

    pub fn key_down(target: ElementId, key: KeyDescriptor, modifiers: Modifiers) -> Self {
        Self {
            kind: SignalKind::KeyDown,
            target,
            key: Some(key),
            modifiers,
        }
    }

    pub fn key_up(target: ElementId, key: KeyDescriptor, modifiers: Modifiers) -> Self {
        Self {
            kind: SignalKind::KeyUp,
            target,
            key: Some(key),
            modifiers,
        }
    }
}

impl Document {
    pub fn subscribe(&mut self, target: ElementId, kind: SignalKind) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push(Listener { id, target, kind });
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        before != self.listeners.len()
    }

    /// Subscribers of `(target, kind)` in subscription order.
    pub fn listeners(&self, target: ElementId, kind: SignalKind) -> Vec<ListenerId> {
        self.listeners
            .iter()
            .filter(|l| l.target == target && l.kind == kind)
            .map(|l| l.id)
            .collect()
    }

    pub fn listener_count(&self, target: ElementId) -> usize {
        self.listeners.iter().filter(|l| l.target == target).count()
    }
}
