//! Bounded, checked data stack

use block_types::Cell;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Capacity of the data stack, matching the original fixed array.
pub const STACK_CELLS: usize = 8;

/// Errors from stack operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    #[error("data stack overflow (capacity {STACK_CELLS})")]
    StackOverflow,

    #[error("data stack underflow")]
    StackUnderflow,
}

/// A bounded cell stack with checked push and pop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataStack {
    cells: [Cell; STACK_CELLS],
    depth: usize,
}

impl DataStack {
    pub fn new() -> Self {
        Self {
            cells: [Cell::TERMINATOR; STACK_CELLS],
            depth: 0,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_empty(&self) -> bool {
        self.depth == 0
    }

    pub fn push(&mut self, cell: Cell) -> Result<(), StackError> {
        if self.depth == STACK_CELLS {
            return Err(StackError::StackOverflow);
        }
        self.cells[self.depth] = cell;
        self.depth += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<Cell, StackError> {
        if self.depth == 0 {
            return Err(StackError::StackUnderflow);
        }
        self.depth -= 1;
        Ok(self.cells[self.depth])
    }

    /// Top of stack without removing it.
    pub fn peek(&self) -> Option<Cell> {
        self.depth.checked_sub(1).map(|top| self.cells[top])
    }
}

impl Default for DataStack {
    fn default() -> Self {
        Self::new()
    }
}
