//! Box-model / flexbox-style layout engine.
//!
//! One recursive descent per frame interleaves measurement and positioning:
//! measure a node, walk its children along the main axis, recurse, and
//! return an owned [`LayoutTree`] borrowing the component tree. Alignment
//! and justification are a separate opt-in pass over positioned siblings.

mod core;
mod flex;
mod measure;

pub use core::{LayoutEngine, LayoutTree, apply_flex_adjustments};
pub use flex::{
    FlexChild, align_items, calculate_flex_grow, calculate_flex_shrink, justify_content,
};
pub use measure::{
    apply_constraints, border_size, measure_box, measure_text, resolve_dimension, spacing_height,
    spacing_width,
};
