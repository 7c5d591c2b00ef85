//! The fixed 48-symbol letter table and its prefix-code groups

use crate::error::CodecError;

/// The canonical alphabet, ordered so that frequent letters get the
/// shortest codewords. Position determines both group and suffix.
pub const LETTERS: &str = " rtoeanismcylgfwdvpbhxuq0123456789j-k.z/;:!+@*,?";

/// The three prefix-code groups.
///
/// Prefixes `0`, `10` and `11` make the code prefix-free: a decoder can
/// always classify the next codeword from its leading one or two bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// Table positions 0-7: 1-bit prefix `0` + 3-bit suffix.
    Short,
    /// Table positions 8-15: 2-bit prefix `10` + 3-bit suffix.
    Medium,
    /// Table positions 16-47: 2-bit prefix `11` + 5-bit suffix.
    Long,
}

impl Group {
    /// Total codeword length in bits, prefix included.
    pub const fn codeword_bits(self) -> u32 {
        match self {
            Group::Short => 4,
            Group::Medium => 5,
            Group::Long => 7,
        }
    }

    pub const fn prefix_value(self) -> u32 {
        match self {
            Group::Short => 0b0,
            Group::Medium => 0b10,
            Group::Long => 0b11,
        }
    }

    pub const fn suffix_bits(self) -> u32 {
        match self {
            Group::Short | Group::Medium => 3,
            Group::Long => 5,
        }
    }

    /// First table position covered by this group.
    const fn base(self) -> usize {
        match self {
            Group::Short => 0,
            Group::Medium => 8,
            Group::Long => 16,
        }
    }
}

/// Looks up a symbol's group and suffix value.
///
/// Fails with [`CodecError::UnknownSymbol`] for characters outside the
/// table; packing must never proceed with an undefined index.
pub fn group_and_suffix(symbol: char) -> Result<(Group, u8), CodecError> {
    let position = LETTERS
        .find(symbol)
        .ok_or(CodecError::UnknownSymbol(symbol))?;
    Ok(match position {
        0..=7 => (Group::Short, position as u8),
        8..=15 => (Group::Medium, (position - 8) as u8),
        _ => (Group::Long, (position - 16) as u8),
    })
}

/// Maps a decoded (group, suffix) pair back to its symbol.
///
/// Total over valid pairs by construction: every codeword the decoder can
/// classify lands inside its group's slice of the table.
pub fn symbol_of(group: Group, suffix: u8) -> char {
    let suffix = suffix as usize & ((1 << group.suffix_bits()) - 1);
    LETTERS.as_bytes()[group.base() + suffix] as char
}
