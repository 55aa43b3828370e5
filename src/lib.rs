//! weft: a flexbox-style layout engine and component runtime for
//! terminal UIs.
//!
//! A declarative [`Component`] tree is measured and positioned against the
//! terminal grid each frame by the [`LayoutEngine`], rendered to styled
//! text, and written through a change-detecting frame renderer. Layout is a
//! pure function of the tree and the terminal dimensions; nothing is cached
//! across frames.

pub mod component;
pub mod cursor;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod render;
pub mod runtime;
pub mod statics;
pub mod types;
pub mod width;

pub use component::{
    Component, ContainerProps, CustomWidget, StackProps, StaticProps, TextProps, container,
    flex_spacer, hstack, hstack_with, spacer, static_group, styled_text, text, vstack, vstack_with,
};
pub use error::{Result, WeftError};
pub use geometry::{Layout, Size};
pub use layout::{
    FlexChild, LayoutEngine, LayoutTree, align_items, apply_flex_adjustments, calculate_flex_grow,
    calculate_flex_shrink, justify_content, measure_box, measure_text, resolve_dimension,
};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::{MetricSnapshot, RuntimeMetrics};
pub use render::{FrameRenderer, RenderContext, Style, compose_frame, render_tree};
pub use runtime::{
    AppRuntime, CliDriver, CliDriverError, DriverResult, EventFlow, RuntimeConfig, RuntimeContext,
    RuntimeEvent,
};
pub use statics::StaticBuffer;
pub use types::{
    Align, BorderStyle, Color, Dimension, Direction, Justify, Spacing, TextAlign, WrapMode,
};
pub use width::{display_width, strip_ansi, visual_height, visual_width};
