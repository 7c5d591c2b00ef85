//! The 32-bit cell: 4-bit tag plus 28-bit payload

use serde::{Deserialize, Serialize};

use crate::tag::Tag;

/// A single 32-bit cell of block storage.
///
/// Bits [0,4) carry the [`Tag`]; bits [4,32) carry the payload, which is
/// either prefix-coded packed text or a numeric literal depending on the
/// tag. The all-zero cell is reserved as the block terminator and never
/// decodes to a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Cell(u32);

impl Cell {
    /// The block terminator sentinel.
    pub const TERMINATOR: Cell = Cell(0);

    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The tag field, bits [0,4).
    pub const fn tag_bits(self) -> u8 {
        (self.0 & 0xF) as u8
    }

    /// The payload with the tag field masked off.
    pub const fn payload(self) -> u32 {
        self.0 & !0xF
    }

    /// The numeric literal value of this cell.
    ///
    /// Literals use a 5-bit shift: the low bit of the 28-bit payload is
    /// not part of the number. This matches the on-image format.
    pub const fn literal(self) -> u32 {
        self.0 >> 5
    }

    pub const fn is_terminator(self) -> bool {
        self.0 == 0
    }

    /// Returns this cell with its tag field replaced.
    pub const fn with_tag(self, tag: Tag) -> Cell {
        Cell(self.payload() | tag as u32)
    }

    pub fn tag(self) -> Tag {
        Tag::from_bits(self.tag_bits())
    }
}

impl From<u32> for Cell {
    fn from(raw: u32) -> Self {
        Cell(raw)
    }
}

impl From<Cell> for u32 {
    fn from(cell: Cell) -> Self {
        cell.0
    }
}
