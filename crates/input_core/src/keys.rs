//! Key-down descriptors and keycode tables.
//!
//! Key codes are the legacy numeric `keyCode` values platforms still report
//! on key-down. They identify physical keys, not characters, so turning one
//! into text goes through a [`Keymap`].

pub mod key_codes {
    pub const BACKSPACE: u32 = 8;
    pub const ENTER: u32 = 13;
    pub const SHIFT: u32 = 16;
    pub const SPACE: u32 = 32;
    pub const ARROW_LEFT: u32 = 37;
    pub const ARROW_RIGHT: u32 = 39;
    pub const DELETE: u32 = 46;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub alt: bool,
    pub ctrl: bool,
    /// Command on macOS, the Windows key elsewhere.
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        alt: false,
        ctrl: false,
        meta: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        ..Modifiers::NONE
    };

    pub const ALT: Modifiers = Modifiers {
        alt: true,
        ..Modifiers::NONE
    };

    pub const META: Modifiers = Modifiers {
        meta: true,
        ..Modifiers::NONE
    };
}

/// The key half of a key-down/key-up event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyDescriptor {
    pub code: u32,
}

impl KeyDescriptor {
    pub const fn new(code: u32) -> Self {
        Self { code }
    }

    /// Descriptor for the key that types `ch` on a US layout, if any.
    ///
    /// Letters map to their uppercase code (the physical key), digits and
    /// space map to themselves.
    pub fn for_char(ch: char) -> Option<Self> {
        match ch {
            'a'..='z' => Some(Self::new(ch.to_ascii_uppercase() as u32)),
            'A'..='Z' | '0'..='9' | ' ' => Some(Self::new(ch as u32)),
            _ => None,
        }
    }

    #[inline]
    pub fn is_backspace(&self) -> bool {
        self.code == key_codes::BACKSPACE
    }

    #[inline]
    pub fn is_delete(&self) -> bool {
        self.code == key_codes::DELETE
    }
}

/// Keycode → character table.
pub trait Keymap {
    /// The character a key produces when typed, or `None` for keys that do
    /// not insert text (arrows, modifiers, function keys...).
    ///
    /// The returned character is in the table's base case; shift handling is
    /// left to the caller.
    fn printable_char(&self, code: u32) -> Option<char>;
}

/// US keyboard table: a key is printable when it is a digit, letter, numpad,
/// punctuation, space or return key; its character is the code point equal
/// to the key code.
///
/// This mirrors what browsers did for years with `String.fromCharCode(keyCode)`:
/// correct for letters, digits and space, approximate for punctuation and the
/// numpad.
#[derive(Clone, Copy, Debug, Default)]
pub struct UsKeymap;

impl UsKeymap {
    pub fn is_printable(code: u32) -> bool {
        matches!(code,
            48..=57       // digits
            | 32 | 13     // space, return
            | 65..=90     // letters
            | 96..=111    // numpad
            | 186..=192   // ;=,-./`
            | 219..=222   // [\]'
        )
    }
}

impl Keymap for UsKeymap {
    fn printable_char(&self, code: u32) -> Option<char> {
        if !Self::is_printable(code) {
            return None;
        }
        char::from_u32(code)
    }
}
