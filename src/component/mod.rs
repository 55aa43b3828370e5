//! Declarative component model.
//!
//! Components form an immutable tree that the layout engine measures and
//! positions each frame. The set of variants is closed; the `Custom`
//! variant is the extension point for widgets with their own measurement.

mod core;

pub use core::{
    Component, ContainerProps, CustomWidget, StackProps, StaticProps, TextProps, container,
    flex_spacer, hstack, hstack_with, spacer, static_group, styled_text, text, vstack, vstack_with,
};
