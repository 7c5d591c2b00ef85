//! Platform-independent key representation

use serde::{Deserialize, Serialize};

/// Platform-independent key event.
///
/// Hosts translate hardware scancodes into these before calling the
/// shell. Ctrl chords arrive as `Ctrl(letter)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Printable character
    Char(char),

    // Navigation
    Left,
    Right,
    Up,
    Down,

    /// Word separator
    Space,

    /// Ctrl chord (attribute selection)
    Ctrl(char),
}

impl Key {
    /// Convert an ASCII byte to a Key (for keyboard translation).
    ///
    /// Control bytes 0x01-0x1A map to `Ctrl('a')`-`Ctrl('z')`; arrow keys
    /// have no ASCII form and must be constructed directly.
    pub fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b' ' => Some(Key::Space),
            0x01..=0x1A => Some(Key::Ctrl((byte - 1 + b'a') as char)),
            ch if (0x20..0x7F).contains(&ch) => Some(Key::Char(ch as char)),
            _ => None,
        }
    }
}
