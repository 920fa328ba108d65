//! Utilities for positioning text on pages: margins and word wrapping.
//!
//! Wrapping is measured with the same font metrics that are used to set the text, so a
//! wrapped line never runs past the width it was wrapped to unless a single character is
//! wider than that width.

mod margins;
mod text;

pub use margins::*;
pub use text::*;
