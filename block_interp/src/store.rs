//! Bounds-described view over the cell image

use block_types::Cell;
use thiserror::Error;

/// Cells per block window.
pub const BLOCK_CELLS: usize = 256;

/// Errors from addressing the cell store.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BlockError {
    #[error("block {block} is outside the image ({blocks_available} blocks available)")]
    OutOfRangeBlock {
        block: usize,
        blocks_available: usize,
    },
}

/// A read-only view over the flat cell array backing all blocks.
///
/// Block `n` occupies cells `[256n, 256n+256)`. The image carries no
/// block-count header; the view's length is the single source of truth
/// for which indices are valid.
#[derive(Debug, Clone, Copy)]
pub struct CellStore<'a> {
    cells: &'a [Cell],
}

impl<'a> CellStore<'a> {
    pub fn new(cells: &'a [Cell]) -> Self {
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of complete blocks the image holds.
    pub fn block_count(&self) -> usize {
        self.cells.len() / BLOCK_CELLS
    }

    /// Returns block `n`'s full 256-cell window.
    ///
    /// Fails fast with [`BlockError::OutOfRangeBlock`] when the window is
    /// not entirely inside the image.
    pub fn block(&self, n: usize) -> Result<&'a [Cell], BlockError> {
        n.checked_mul(BLOCK_CELLS)
            .and_then(|start| self.cells.get(start..start.checked_add(BLOCK_CELLS)?))
            .ok_or(BlockError::OutOfRangeBlock {
                block: n,
                blocks_available: self.block_count(),
            })
    }
}
