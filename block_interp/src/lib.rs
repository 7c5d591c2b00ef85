//! # Block Interpreter
//!
//! This crate renders colorForth blocks: it scans a 256-cell window of an
//! externally loaded cell image, classifies each cell by its tag, and
//! emits colored text or numeric tokens to a render sink.
//!
//! ## Philosophy
//!
//! - **Borrowed, never owned**: The cell image belongs to whoever loaded
//!   it; the interpreter takes a bounds-described read-only view
//! - **Fail fast at the boundary**: Block range is validated once at
//!   entry, then the scan cannot read out of bounds
//! - **Permissive inside**: Malformed cells degrade to plain text;
//!   nothing inside a block aborts rendering
//! - **No globals**: The definition counter is per-call session state
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A Forth runtime (definitions are displayed, never executed)
//! - A block editor (no cell is ever written)
//! - A navigator (one block per call; hosts pick the index)

pub mod interp;
pub mod store;

pub use interp::{run_block, BlockEnd, BlockOutcome};
pub use store::{BlockError, CellStore, BLOCK_CELLS};
