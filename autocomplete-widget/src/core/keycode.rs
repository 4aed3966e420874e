//! Key code definitions and key event handling

use std::fmt;

use serde::{Deserialize, Serialize};

use super::state::Target;

/// Key code values, as reported by the host's keydown event (`keyCode`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const BACKSPACE: KeyCode = KeyCode(8);
    pub const TAB: KeyCode = KeyCode(9);
    pub const ENTER: KeyCode = KeyCode(13);
    pub const SHIFT: KeyCode = KeyCode(16);
    pub const ESCAPE: KeyCode = KeyCode(27);
    pub const SPACE: KeyCode = KeyCode(32);
    pub const PAGE_UP: KeyCode = KeyCode(33);
    pub const PAGE_DOWN: KeyCode = KeyCode(34);
    pub const LEFT: KeyCode = KeyCode(37);
    pub const UP: KeyCode = KeyCode(38);
    pub const RIGHT: KeyCode = KeyCode(39);
    pub const DOWN: KeyCode = KeyCode(40);
    pub const DELETE: KeyCode = KeyCode(46);

    pub const KEY_0: KeyCode = KeyCode(48);
    pub const KEY_9: KeyCode = KeyCode(57);
    pub const KEY_A: KeyCode = KeyCode(65);
    pub const KEY_Z: KeyCode = KeyCode(90);
    pub const NUMPAD_0: KeyCode = KeyCode(96);
    pub const F1: KeyCode = KeyCode(112);

    /// Key code for an ASCII letter or digit, as a keyboard reports it
    pub fn from_char(ch: char) -> Option<KeyCode> {
        match ch {
            'a'..='z' => Some(KeyCode(ch.to_ascii_uppercase() as u32)),
            'A'..='Z' | '0'..='9' => Some(KeyCode(ch as u32)),
            ' ' => Some(Self::SPACE),
            _ => None,
        }
    }

    /// Whether this key types (or deletes) text in the query box.
    pub fn is_printable(&self) -> bool {
        matches!(
            self.0,
            8 | 32           // backspace, space
            | 48..=57        // number keys
            | 65..=90        // letter keys
            | 96..=111       // numpad keys
            | 186..=192      // ;=,-./`
            | 219..=222 // [\]'
        )
    }

    /// Classify this key for the navigation state machine
    pub fn kind(&self) -> KeyKind {
        match *self {
            Self::UP => KeyKind::Up,
            Self::DOWN => KeyKind::Down,
            Self::SPACE => KeyKind::Space,
            Self::ENTER => KeyKind::Enter,
            Self::ESCAPE => KeyKind::Escape,
            k if k.is_printable() => KeyKind::Printable,
            _ => KeyKind::Other,
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            KeyKind::Up => write!(f, "ArrowUp"),
            KeyKind::Down => write!(f, "ArrowDown"),
            KeyKind::Space => write!(f, "Space"),
            KeyKind::Enter => write!(f, "Enter"),
            KeyKind::Escape => write!(f, "Escape"),
            _ => write!(f, "KeyCode({})", self.0),
        }
    }
}

/// Role a key plays in the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Up,
    Down,
    Space,
    Enter,
    Escape,
    /// Any other key that edits the query text
    Printable,
    Other,
}

/// A keydown event delivered to the widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// The key code
    pub code: KeyCode,
    /// Widget element the event was dispatched on (`None` for the wrapper
    /// or any element outside the input and option rows)
    #[serde(default)]
    pub target: Option<Target>,
}

impl KeyEvent {
    pub fn new(code: KeyCode, target: Option<Target>) -> Self {
        Self { code, target }
    }

    /// Keydown on the query input
    pub fn on_input(code: KeyCode) -> Self {
        Self::new(code, Some(Target::Input))
    }

    /// Keydown on option row `index`
    pub fn on_option(code: KeyCode, index: usize) -> Self {
        Self::new(code, Some(Target::Option(index)))
    }

    /// Whether the event was dispatched on the query input
    pub fn is_on_input(&self) -> bool {
        self.target == Some(Target::Input)
    }
}
