#![no_std]

//! # Block Types
//!
//! This crate defines the fundamental types for the colorForth block format.
//!
//! ## Philosophy
//!
//! - **Cells, not characters**: Source is stored as 32-bit cells, each one
//!   a packed word or a tagged numeric literal
//! - **Explicit over implicit**: The tag table is a closed enumeration,
//!   not a bag of magic numbers
//! - **Testable**: Render events are serializable and can be compared
//!   structurally in tests
//!
//! ## Key Types
//!
//! - [`Cell`]: A 32-bit storage unit (4-bit tag + 28-bit payload)
//! - [`Tag`]: The closed 16-value tag enumeration carried in cell bits [0,4)
//! - [`TokenColor`]: The six display attribute classes
//! - [`RenderEvent`]: The output contract to display hosts

extern crate alloc;

pub mod cell;
pub mod render;
pub mod tag;

pub use cell::Cell;
pub use render::{RenderEvent, RenderLog, RenderSink, TokenText};
pub use tag::{Rendering, Tag, TokenColor};
