use std::fmt;
use std::sync::Arc;

use crate::geometry::{Layout, Size};
use crate::layout::{measure_box, measure_text};
use crate::types::{
    Align, BorderStyle, Color, Dimension, Direction, Justify, Spacing, TextAlign, WrapMode,
};

/// Properties of a text leaf.
#[derive(Debug, Clone, Default)]
pub struct TextProps {
    pub content: String,
    pub color: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub wrap: WrapMode,
    pub align: TextAlign,
    pub key: String,
}

/// Properties of a container (the box variant).
#[derive(Debug, Clone, Default)]
pub struct ContainerProps {
    pub direction: Direction,
    pub width: Dimension,
    pub height: Dimension,
    pub min_width: i32,
    pub min_height: i32,
    pub max_width: i32,
    pub max_height: i32,
    pub flex_grow: f64,
    pub flex_shrink: f64,
    pub align_items: Align,
    pub justify_content: Justify,
    pub padding: Spacing,
    pub margin: Spacing,
    pub gap: i32,
    pub border: BorderStyle,
    pub border_color: Option<Color>,
    pub background: Option<Color>,
    pub key: String,
}

/// Properties of a static region.
#[derive(Debug, Clone, Default)]
pub struct StaticProps {
    pub key: String,
}

/// Escape hatch for widgets with their own measurement and rendering.
pub trait CustomWidget: Send + Sync {
    fn measure(&self, available_width: i32, available_height: i32) -> Size;
    fn render(&self, layout: Layout) -> String;

    fn key(&self) -> &str {
        ""
    }

    fn children(&self) -> &[Component] {
        &[]
    }
}

/// A node in the declarative UI tree.
#[derive(Clone)]
pub enum Component {
    Text(TextProps),
    Container(ContainerProps, Vec<Component>),
    /// Items accumulate once per key into the static buffer; the layout
    /// engine treats the region as a leaf.
    Static(StaticProps, Vec<Component>),
    Custom(Arc<dyn CustomWidget>),
}

impl Component {
    /// Size requirements of this node given the available extent.
    ///
    /// Pure: safe to call repeatedly within a frame.
    pub fn measure(&self, available_width: i32, available_height: i32) -> Size {
        match self {
            Self::Text(props) => measure_text(&props.content, props.wrap, available_width),
            Self::Container(props, children) => {
                measure_box(props, children, available_width, available_height)
            }
            Self::Static(_, items) => measure_static(items, available_width, available_height),
            Self::Custom(widget) => widget.measure(available_width, available_height),
        }
    }

    /// Child components in stable order. Static items are not laid out by
    /// the engine, so a static region reports no children.
    pub fn children(&self) -> &[Component] {
        match self {
            Self::Container(_, children) => children,
            Self::Custom(widget) => widget.children(),
            _ => &[],
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Text(props) => &props.key,
            Self::Container(props, _) => &props.key,
            Self::Static(props, _) => &props.key,
            Self::Custom(widget) => widget.key(),
        }
    }
}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(props) => f.debug_tuple("Text").field(&props.content).finish(),
            Self::Container(props, children) => f
                .debug_struct("Container")
                .field("direction", &props.direction)
                .field("children", &children.len())
                .finish(),
            Self::Static(props, items) => f
                .debug_struct("Static")
                .field("key", &props.key)
                .field("items", &items.len())
                .finish(),
            Self::Custom(widget) => f.debug_tuple("Custom").field(&widget.key()).finish(),
        }
    }
}

fn measure_static(items: &[Component], available_width: i32, available_height: i32) -> Size {
    let mut total_height = 0;
    let mut max_width = 0;

    for item in items {
        let size = item.measure(available_width, available_height);
        total_height += size.height;
        if size.width > max_width {
            max_width = size.width;
        }
    }

    Size::new(max_width, total_height)
}

/// Plain text leaf with default styling.
pub fn text(content: impl Into<String>) -> Component {
    Component::Text(TextProps {
        content: content.into(),
        ..TextProps::default()
    })
}

/// Text leaf with explicit properties. `content` wins over `props.content`.
pub fn styled_text(content: impl Into<String>, mut props: TextProps) -> Component {
    props.content = content.into();
    Component::Text(props)
}

pub fn container(props: ContainerProps, children: Vec<Component>) -> Component {
    Component::Container(props, children)
}

/// Simplified property set shared by the stack helpers.
#[derive(Debug, Clone, Default)]
pub struct StackProps {
    pub gap: i32,
    pub padding: Spacing,
    pub align_items: Align,
    pub justify_content: Justify,
    pub width: Dimension,
    pub height: Dimension,
    pub key: String,
}

impl StackProps {
    fn into_container(self, direction: Direction) -> ContainerProps {
        ContainerProps {
            direction,
            gap: self.gap,
            padding: self.padding,
            align_items: self.align_items,
            justify_content: self.justify_content,
            width: self.width,
            height: self.height,
            key: self.key,
            ..ContainerProps::default()
        }
    }
}

/// Vertical stack with default properties.
pub fn vstack(children: Vec<Component>) -> Component {
    container(
        ContainerProps {
            direction: Direction::Column,
            ..ContainerProps::default()
        },
        children,
    )
}

pub fn vstack_with(props: StackProps, children: Vec<Component>) -> Component {
    container(props.into_container(Direction::Column), children)
}

/// Horizontal stack with default properties.
pub fn hstack(children: Vec<Component>) -> Component {
    container(
        ContainerProps {
            direction: Direction::Row,
            ..ContainerProps::default()
        },
        children,
    )
}

pub fn hstack_with(props: StackProps, children: Vec<Component>) -> Component {
    container(props.into_container(Direction::Row), children)
}

/// Empty box fixed to `size` cells on both axes; the parent's direction
/// decides which axis matters.
pub fn spacer(size: i32) -> Component {
    container(
        ContainerProps {
            width: Dimension::Fixed(size),
            height: Dimension::Fixed(size),
            ..ContainerProps::default()
        },
        Vec::new(),
    )
}

/// Empty box that soaks up surplus main-axis space.
pub fn flex_spacer() -> Component {
    container(
        ContainerProps {
            flex_grow: 1.0,
            ..ContainerProps::default()
        },
        Vec::new(),
    )
}

/// Static region whose items are appended to the static buffer once per key.
pub fn static_group(key: impl Into<String>, items: Vec<Component>) -> Component {
    Component::Static(StaticProps { key: key.into() }, items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacer_is_fixed_on_both_axes() {
        let spacer = spacer(3);
        match spacer {
            Component::Container(props, children) => {
                assert_eq!(props.width, Dimension::Fixed(3));
                assert_eq!(props.height, Dimension::Fixed(3));
                assert!(children.is_empty());
            }
            other => panic!("expected container, got {other:?}"),
        }
    }

    #[test]
    fn flex_spacer_grows() {
        match flex_spacer() {
            Component::Container(props, _) => assert_eq!(props.flex_grow, 1.0),
            other => panic!("expected container, got {other:?}"),
        }
    }

    #[test]
    fn stacks_pick_their_direction() {
        match vstack(vec![text("a")]) {
            Component::Container(props, _) => assert_eq!(props.direction, Direction::Column),
            other => panic!("expected container, got {other:?}"),
        }
        match hstack_with(
            StackProps {
                gap: 2,
                ..StackProps::default()
            },
            vec![text("a")],
        ) {
            Component::Container(props, _) => {
                assert_eq!(props.direction, Direction::Row);
                assert_eq!(props.gap, 2);
            }
            other => panic!("expected container, got {other:?}"),
        }
    }

    #[test]
    fn static_measures_stacked_items() {
        let group = static_group("log", vec![text("abc"), text("defgh"), text("i")]);
        let size = group.measure(80, 24);
        assert_eq!(size.width, 5);
        assert_eq!(size.height, 3);
        assert!(group.children().is_empty());
    }

    #[test]
    fn custom_widget_measures_and_renders_itself() {
        struct Gauge {
            percent: i32,
        }

        impl CustomWidget for Gauge {
            fn measure(&self, available_width: i32, _available_height: i32) -> Size {
                Size::new(available_width.min(10), 1)
            }

            fn render(&self, layout: Layout) -> String {
                let filled = (layout.width * self.percent / 100).max(0) as usize;
                "#".repeat(filled)
            }

            fn key(&self) -> &str {
                "gauge"
            }
        }

        let widget = Component::Custom(Arc::new(Gauge { percent: 50 }));
        assert_eq!(widget.measure(80, 24), Size::new(10, 1));
        assert_eq!(widget.key(), "gauge");
        assert!(widget.children().is_empty());

        let engine = crate::layout::LayoutEngine::new(80, 24);
        let tree = engine.calculate_layout(&widget);
        assert_eq!(tree.layout.width, 10);

        let mut statics = crate::statics::StaticBuffer::new();
        let mut ctx = crate::render::RenderContext::new(&mut statics);
        assert_eq!(widget.render(tree.layout, &mut ctx), "#####");
    }

    #[test]
    fn styled_text_content_wins() {
        let component = styled_text(
            "actual",
            TextProps {
                content: "ignored".to_string(),
                bold: true,
                ..TextProps::default()
            },
        );
        match component {
            Component::Text(props) => {
                assert_eq!(props.content, "actual");
                assert!(props.bold);
            }
            other => panic!("expected text, got {other:?}"),
        }
    }
}
