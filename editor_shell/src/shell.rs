//! ShellCore state machine

use block_interp::{run_block, BlockError, BlockOutcome, CellStore};
use block_types::{Cell, RenderSink, TokenColor};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::key::Key;
use crate::stack::{DataStack, StackError};

/// Outcome from applying a key to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShellOutcome {
    /// Display the character at the cursor
    Echo(char),
    /// The current word ended; advance past a separator space
    WordBreak,
    /// Move the cursor by the given column/row delta
    MoveCursor { dx: i8, dy: i8 },
    /// Switch the display attribute
    SetColor(TokenColor),
    /// Key had no effect
    Ignored,
}

/// Errors from shell block commands.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ShellError {
    #[error(transparent)]
    Stack(#[from] StackError),

    #[error(transparent)]
    Block(#[from] BlockError),
}

/// The line-editor shell state: display attribute, word echo buffer, and
/// the data stack block commands consume.
///
/// The echo buffer only mirrors what the user typed since the last word
/// break, for display purposes; its contents are never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellCore {
    attribute: Option<TokenColor>,
    word: String,
    stack: DataStack,
}

impl ShellCore {
    pub fn new() -> Self {
        Self {
            attribute: None,
            word: String::new(),
            stack: DataStack::new(),
        }
    }

    /// The attribute selected by the last Ctrl chord, if any.
    pub fn attribute(&self) -> Option<TokenColor> {
        self.attribute
    }

    /// Characters typed since the last word break.
    pub fn current_word(&self) -> &str {
        &self.word
    }

    pub fn stack(&self) -> &DataStack {
        &self.stack
    }

    /// Apply a key event and report the display effect.
    pub fn apply_key(&mut self, key: Key) -> ShellOutcome {
        match key {
            Key::Char(ch) => {
                self.word.push(ch);
                ShellOutcome::Echo(ch)
            }
            Key::Space => {
                self.word.clear();
                ShellOutcome::WordBreak
            }
            Key::Left => ShellOutcome::MoveCursor { dx: -1, dy: 0 },
            Key::Right => ShellOutcome::MoveCursor { dx: 1, dy: 0 },
            Key::Up => ShellOutcome::MoveCursor { dx: 0, dy: -1 },
            Key::Down => ShellOutcome::MoveCursor { dx: 0, dy: 1 },
            Key::Ctrl(chord) => match Self::chord_color(chord) {
                Some(color) => {
                    self.attribute = Some(color);
                    ShellOutcome::SetColor(color)
                }
                None => ShellOutcome::Ignored,
            },
        }
    }

    /// Queue a block index for the next `load`.
    pub fn queue_block(&mut self, n: u32) -> Result<(), StackError> {
        self.stack.push(Cell::new(n))
    }

    /// The `load` word: pop a block index and render that block.
    pub fn load(
        &mut self,
        store: &CellStore<'_>,
        sink: &mut dyn RenderSink,
    ) -> Result<BlockOutcome, ShellError> {
        let n = self.stack.pop()?;
        Ok(run_block(store, n.raw() as usize, sink)?)
    }

    fn chord_color(chord: char) -> Option<TokenColor> {
        match chord {
            'r' => Some(TokenColor::Red),
            'y' => Some(TokenColor::Yellow),
            'g' => Some(TokenColor::Green),
            'c' => Some(TokenColor::Cyan),
            'p' => Some(TokenColor::Magenta),
            'o' => Some(TokenColor::White),
            _ => None,
        }
    }
}

impl Default for ShellCore {
    fn default() -> Self {
        Self::new()
    }
}
