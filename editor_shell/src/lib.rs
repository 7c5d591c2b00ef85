//! # Editor Shell
//!
//! The character-level shell around the block interpreter: key events in,
//! display effects out, plus the small data stack that block commands
//! operate on.
//!
//! ## Philosophy
//!
//! - **Events, not scancodes**: Hardware scancode translation is the
//!   host's job; the shell consumes platform-independent [`Key`] events
//! - **No globals**: Attribute state, echo buffer, and data stack live in
//!   an explicit [`ShellCore`] owned by the caller
//! - **Checked, not corrupting**: The data stack is bounded and reports
//!   overflow and underflow instead of scribbling over neighbors
//! - **Mechanism over policy**: The shell reports what should happen
//!   (echo, move, recolor); hosts decide how to draw it
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A Forth outer interpreter (typed words are echoed, never evaluated)
//! - A block editor (nothing is written back to the image)
//! - A display driver (cursor movement is reported as deltas)

pub mod key;
pub mod shell;
pub mod stack;

pub use key::Key;
pub use shell::{ShellCore, ShellError, ShellOutcome};
pub use stack::{DataStack, StackError, STACK_CELLS};
