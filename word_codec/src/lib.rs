//! # Word Codec
//!
//! This crate implements the prefix code that packs colorForth words into
//! the 28-bit payload of a [`block_types::Cell`].
//!
//! ## Philosophy
//!
//! - **Bit-exact**: The codeword layout is the on-image format; existing
//!   block images must decode unchanged
//! - **Prefix-free**: No codeword is a prefix of another, so concatenated
//!   codewords decode unambiguously left to right
//! - **Errors, not corruption**: Unknown symbols and oversized words are
//!   reported, never encoded with an undefined index or truncated
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A general text encoding (the alphabet is the fixed 48-symbol table)
//! - A compressor (codeword lengths are fixed per group)
//! - An interpreter (tags are authored by callers, never set here)

pub mod codec;
pub mod error;
pub mod letters;

pub use codec::{pack, unpack, PAYLOAD_BITS};
pub use error::CodecError;
pub use letters::{group_and_suffix, symbol_of, Group, LETTERS};
