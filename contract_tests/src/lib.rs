//! # Format Contract Tests
//!
//! This crate provides "golden" tests for the on-image block format to
//! ensure it doesn't drift accidentally over time.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: The compatibility-critical surfaces are
//!   written as code
//! - **Testability first**: Contract tests fail when the bit layout, tag
//!   table, or render-event shape changes
//! - **Mechanism not policy**: Define what must stay stable, not how to
//!   use it
//!
//! ## Structure
//!
//! - `codec`: codeword bit layout against hand-computed cells
//! - `tags`: the tag-to-color and text-vs-numeric table
//! - `interpreter`: sentinel, window, and line-break behavior, plus the
//!   serialized shape of render events

pub mod codec;
pub mod interpreter;
pub mod tags;

/// Common helpers for building block fixtures
pub mod test_helpers {
    use block_interp::BLOCK_CELLS;
    use block_types::{Cell, Tag};
    use word_codec::pack;

    /// Builds a full block window starting with the given cells and
    /// padded with terminators.
    pub fn block_image(cells: &[Cell]) -> Vec<Cell> {
        assert!(cells.len() <= BLOCK_CELLS, "fixture larger than a block");
        let mut image = vec![Cell::TERMINATOR; BLOCK_CELLS];
        image[..cells.len()].copy_from_slice(cells);
        image
    }

    /// Packs a word and authors its tag, as a block editor would.
    pub fn word_cell(word: &str, tag: Tag) -> Cell {
        pack(word).expect("fixture word must pack").with_tag(tag)
    }

    /// Builds a numeric literal cell for the given tag.
    pub fn number_cell(value: u32, tag: Tag) -> Cell {
        Cell::new(value << 5).with_tag(tag)
    }
}
