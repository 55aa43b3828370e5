//! String rendering of a positioned component tree.
//!
//! The layout engine decides where everything goes; this module turns the
//! tree into styled text. Row children concatenate, column children join on
//! newlines, and the frame renderer writes the composed result to the
//! terminal, skipping writes when nothing changed.

mod core;
mod style;

pub use core::{FrameRenderer, RenderContext, compose_frame, render_tree};
pub use style::{BorderGlyphs, Style, border_glyphs};
