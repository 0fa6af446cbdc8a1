pub type NodeIndex = u32;
pub type ListenerIndex = u64;

/// Handle of an element inside a `dom::Document` arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub NodeIndex);

/// Handle of a signal subscription. Allocated by the document, never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub ListenerIndex);

/// Input-lifecycle signals an element can emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SignalKind {
    /// Focus left the element.
    Blur,
    /// The value changed (fires after the platform applied an edit).
    Input,
    KeyUp,
    /// Fires before the platform applies the keystroke to the value.
    KeyDown,
}

impl SignalKind {
    pub const ALL: [SignalKind; 4] = [
        SignalKind::Blur,
        SignalKind::Input,
        SignalKind::KeyUp,
        SignalKind::KeyDown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SignalKind::Blur => "blur",
            SignalKind::Input => "input",
            SignalKind::KeyUp => "keyup",
            SignalKind::KeyDown => "keydown",
        }
    }
}
