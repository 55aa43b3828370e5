use crate::component::Component;
use crate::geometry::Layout;
use crate::layout::flex::{align_items, justify_content};
use crate::layout::measure::border_size;
use crate::types::Direction;

/// Calculates positions for a component tree within fixed terminal
/// dimensions.
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine {
    terminal_width: i32,
    terminal_height: i32,
}

/// A component paired with its resolved layout and positioned children.
///
/// Borrows the component tree; rebuilt from scratch on every layout call
/// and discarded after the frame is rendered.
#[derive(Debug)]
pub struct LayoutTree<'a> {
    pub component: &'a Component,
    pub layout: Layout,
    pub children: Vec<LayoutTree<'a>>,
}

impl LayoutTree<'_> {
    /// Number of nodes in this subtree, including the root.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(LayoutTree::node_count)
            .sum::<usize>()
    }
}

impl LayoutEngine {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            terminal_width: width,
            terminal_height: height,
        }
    }

    /// Entry point: measure and position the whole tree from the terminal's
    /// top-left corner.
    pub fn calculate_layout<'a>(&self, root: &'a Component) -> LayoutTree<'a> {
        self.measure_and_layout(root, self.terminal_width, self.terminal_height, 0, 0)
    }

    fn measure_and_layout<'a>(
        &self,
        component: &'a Component,
        available_width: i32,
        available_height: i32,
        x: i32,
        y: i32,
    ) -> LayoutTree<'a> {
        // Margin offsets the node's own position; it is applied exactly once,
        // here, by the parent positioning this node.
        let (margin_left, margin_top) = match component {
            Component::Container(props, _) => (props.margin.left, props.margin.top),
            _ => (0, 0),
        };

        let adjusted_x = x + margin_left;
        let adjusted_y = y + margin_top;

        let size = component.measure(available_width, available_height);

        let layout = Layout {
            x: adjusted_x,
            y: adjusted_y,
            width: size.width,
            height: size.height,
        };

        let mut child_trees = Vec::new();

        if let Component::Container(props, children) = component {
            if !children.is_empty() {
                child_trees.reserve(children.len());

                let (border_width, border_height) = border_size(props.border);
                let border_left = border_width / 2;
                let border_top = border_height / 2;

                match props.direction {
                    Direction::Column => {
                        let mut current_y = adjusted_y + props.padding.top + border_top;
                        for (i, child) in children.iter().enumerate() {
                            let child_tree = self.measure_and_layout(
                                child,
                                available_width,
                                available_height,
                                adjusted_x + props.padding.left + border_left,
                                current_y,
                            );
                            current_y += child_tree.layout.height;
                            if i < children.len() - 1 && props.gap > 0 {
                                current_y += props.gap;
                            }
                            child_trees.push(child_tree);
                        }
                    }
                    Direction::Row => {
                        let mut current_x = adjusted_x + props.padding.left + border_left;
                        for (i, child) in children.iter().enumerate() {
                            let child_tree = self.measure_and_layout(
                                child,
                                available_width,
                                available_height,
                                current_x,
                                adjusted_y + props.padding.top + border_top,
                            );
                            current_x += child_tree.layout.width;
                            if i < children.len() - 1 && props.gap > 0 {
                                current_x += props.gap;
                            }
                            child_trees.push(child_tree);
                        }
                    }
                }
            }
        }

        LayoutTree {
            component,
            layout,
            children: child_trees,
        }
    }
}

/// Opt-in post-pass running cross-axis alignment and main-axis
/// justification over every container's positioned children.
///
/// The base layout pass never invokes this; callers (or the runtime, via
/// its config flag) run it after `calculate_layout` when a tree uses
/// `align_items` or `justify_content`. Each container's own resolved
/// extents supply the cross/main sizes the adjusters work against.
pub fn apply_flex_adjustments(tree: &mut LayoutTree<'_>) {
    if let Component::Container(props, _) = tree.component {
        if !tree.children.is_empty() {
            let (cross_size, main_size) = match props.direction {
                Direction::Column => (tree.layout.width, tree.layout.height),
                Direction::Row => (tree.layout.height, tree.layout.width),
            };
            align_items(&mut tree.children, props, cross_size);
            justify_content(&mut tree.children, props, main_size);
        }
    }

    for child in &mut tree.children {
        apply_flex_adjustments(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{ContainerProps, StackProps, container, hstack_with, text, vstack};
    use crate::types::{Align, BorderStyle, Dimension, Justify, Spacing};

    #[test]
    fn single_text_at_origin() {
        let root = text("Hello");
        let engine = LayoutEngine::new(80, 24);
        let tree = engine.calculate_layout(&root);
        assert_eq!(tree.layout, Layout::new(0, 0, 5, 1));
        assert!(tree.children.is_empty());
    }

    #[test]
    fn row_gap_offsets_second_child() {
        let root = hstack_with(
            StackProps {
                gap: 3,
                ..StackProps::default()
            },
            vec![text("abcd"), text("ef")],
        );
        let engine = LayoutEngine::new(80, 24);
        let tree = engine.calculate_layout(&root);
        assert_eq!(tree.children[0].layout.x, 0);
        assert_eq!(tree.children[1].layout.x, 4 + 3);
        assert_eq!(tree.children[1].layout.y, 0);
    }

    #[test]
    fn column_children_stack_downward() {
        let root = vstack(vec![text("one"), text("two\nthree"), text("four")]);
        let engine = LayoutEngine::new(80, 24);
        let tree = engine.calculate_layout(&root);
        assert_eq!(tree.children[0].layout.y, 0);
        assert_eq!(tree.children[1].layout.y, 1);
        assert_eq!(tree.children[2].layout.y, 3);
    }

    #[test]
    fn padding_border_and_margin_shift_content_origin() {
        let root = container(
            ContainerProps {
                padding: Spacing::all(1),
                margin: Spacing::all(2),
                border: BorderStyle::Single,
                ..ContainerProps::default()
            },
            vec![text("x")],
        );
        let engine = LayoutEngine::new(80, 24);
        let tree = engine.calculate_layout(&root);
        // Box origin shifts by its margin; content shifts further by
        // padding plus one border cell.
        assert_eq!(tree.layout.x, 2);
        assert_eq!(tree.layout.y, 2);
        assert_eq!(tree.children[0].layout.x, 2 + 1 + 1);
        assert_eq!(tree.children[0].layout.y, 2 + 1 + 1);
    }

    #[test]
    fn nested_margin_offsets_within_parent() {
        let inner = container(
            ContainerProps {
                margin: Spacing::all(1),
                ..ContainerProps::default()
            },
            vec![text("hi")],
        );
        let root = vstack(vec![inner]);
        let engine = LayoutEngine::new(80, 24);
        let tree = engine.calculate_layout(&root);
        assert_eq!(tree.children[0].layout.x, 1);
        assert_eq!(tree.children[0].layout.y, 1);
    }

    #[test]
    fn gap_is_between_children_not_after() {
        let root = container(
            ContainerProps {
                gap: 2,
                ..ContainerProps::default()
            },
            vec![text("a"), text("b")],
        );
        let engine = LayoutEngine::new(80, 24);
        let tree = engine.calculate_layout(&root);
        assert_eq!(tree.children[0].layout.y, 0);
        assert_eq!(tree.children[1].layout.y, 3);
        // One gap between two children.
        assert_eq!(tree.layout.height, 1 + 2 + 1);
    }

    #[test]
    fn layout_is_idempotent() {
        let root = vstack(vec![
            text("alpha"),
            hstack_with(
                StackProps {
                    gap: 1,
                    ..StackProps::default()
                },
                vec![text("b"), text("c")],
            ),
        ]);
        let engine = LayoutEngine::new(100, 40);

        let first = engine.calculate_layout(&root);
        let second = engine.calculate_layout(&root);

        fn flatten(tree: &LayoutTree<'_>, out: &mut Vec<Layout>) {
            out.push(tree.layout);
            for child in &tree.children {
                flatten(child, out);
            }
        }

        let mut a = Vec::new();
        let mut b = Vec::new();
        flatten(&first, &mut a);
        flatten(&second, &mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn node_count_covers_whole_tree() {
        let root = vstack(vec![text("a"), vstack(vec![text("b"), text("c")])]);
        let engine = LayoutEngine::new(80, 24);
        let tree = engine.calculate_layout(&root);
        assert_eq!(tree.node_count(), 5);
    }

    #[test]
    fn adjustment_pass_aligns_and_justifies() {
        let root = container(
            ContainerProps {
                width: Dimension::Fixed(10),
                height: Dimension::Fixed(8),
                align_items: Align::Center,
                justify_content: Justify::End,
                ..ContainerProps::default()
            },
            vec![text("ab"), text("cd")],
        );
        let engine = LayoutEngine::new(80, 24);
        let mut tree = engine.calculate_layout(&root);
        apply_flex_adjustments(&mut tree);

        // Cross axis: centered within width 10.
        assert_eq!(tree.children[0].layout.x, 4);
        // Main axis: group of two 1-high children packed to the bottom.
        assert_eq!(tree.children[0].layout.y, 6);
        assert_eq!(tree.children[1].layout.y, 7);
    }

    #[test]
    fn adjustment_pass_leaves_start_untouched() {
        let root = vstack(vec![text("a"), text("b")]);
        let engine = LayoutEngine::new(80, 24);
        let mut tree = engine.calculate_layout(&root);
        let before: Vec<Layout> = tree.children.iter().map(|c| c.layout).collect();
        apply_flex_adjustments(&mut tree);
        let after: Vec<Layout> = tree.children.iter().map(|c| c.layout).collect();
        assert_eq!(before, after);
    }
}
