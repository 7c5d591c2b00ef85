//! Packing and unpacking words

use block_types::Cell;

use crate::error::CodecError;
use crate::letters::{group_and_suffix, symbol_of, Group};

/// Bits available for packed text in a cell: bits [4,32).
pub const PAYLOAD_BITS: u32 = 28;

/// Packs a word into a cell, most significant bit first.
///
/// Codewords are accumulated into the 28-bit payload budget and then
/// left-aligned into bits [4,32); the tag field is left zero for the
/// caller to author. The empty word is rejected because its encoding
/// would collide with the block terminator.
pub fn pack(word: &str) -> Result<Cell, CodecError> {
    if word.is_empty() {
        return Err(CodecError::EmptyWord);
    }

    let mut packed: u32 = 0;
    let mut used: u32 = 0;

    for symbol in word.chars() {
        let (group, suffix) = group_and_suffix(symbol)?;
        let bits = group.codeword_bits();
        if used + bits > PAYLOAD_BITS {
            return Err(CodecError::WordTooLong { bits: used + bits });
        }
        let code = (group.prefix_value() << group.suffix_bits()) | suffix as u32;
        packed = (packed << bits) | code;
        used += bits;
    }

    Ok(Cell::new(packed << (32 - used)))
}

/// Unpacks a cell's payload back into a word.
///
/// Decoding stops when no set bit remains: the code is prefix-free and
/// only the reserved terminator is all-zero, so remaining zeros are
/// padding. A trailing space (the all-zero Short codeword) is therefore
/// indistinguishable from padding and is dropped; this lossy asymmetry
/// is part of the on-image format and must be preserved.
pub fn unpack(cell: Cell) -> String {
    let mut coded = cell.payload();
    let mut word = String::new();

    while coded != 0 {
        let group = if coded >> 31 == 0 {
            Group::Short
        } else if coded >> 30 == 0b10 {
            Group::Medium
        } else {
            Group::Long
        };
        let bits = group.codeword_bits();
        let suffix = (coded >> (32 - bits)) & ((1 << group.suffix_bits()) - 1);
        word.push(symbol_of(group, suffix as u8));
        coded <<= bits;
    }

    word
}
