//! # CLI Block Viewer
//!
//! A std host for the block interpreter: loads a raw cell image from a
//! file and renders a block to a terminal with ANSI colors.
//!
//! The interpreter core stays display-agnostic; everything
//! terminal-specific (file IO, ANSI escapes) lives here.

pub mod ansi;
pub mod image;

pub use ansi::AnsiRenderer;
pub use image::{load_image, ImageError};
