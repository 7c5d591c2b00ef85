//! Codec error types

use thiserror::Error;

/// Errors from packing a word. Unpacking is infallible.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    #[error("symbol '{0}' is not in the letter table")]
    UnknownSymbol(char),

    #[error("word needs {bits} encoded bits but the payload holds 28")]
    WordTooLong { bits: u32 },

    #[error("empty word cannot be packed; the zero cell is the block terminator")]
    EmptyWord,
}
