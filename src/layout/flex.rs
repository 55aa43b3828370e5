use crate::component::ContainerProps;
use crate::geometry::Size;
use crate::layout::LayoutTree;
use crate::types::{Align, Direction, Justify};

/// A sibling's measured size and flex weights, as seen by the distributor.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlexChild {
    pub size: Size,
    pub flex_grow: f64,
    pub flex_shrink: f64,
}

/// Distribute surplus main-axis space proportionally to grow weights.
///
/// Each share truncates toward zero, so the distributed total may fall
/// short of `extra_space`; the remainder is dropped, never redistributed.
pub fn calculate_flex_grow(children: &[FlexChild], extra_space: i32) -> Vec<i32> {
    let mut result = vec![0; children.len()];

    if extra_space <= 0 {
        return result;
    }

    let total_grow: f64 = children.iter().map(|child| child.flex_grow).sum();
    if total_grow == 0.0 {
        return result;
    }

    for (i, child) in children.iter().enumerate() {
        result[i] = (extra_space as f64 * child.flex_grow / total_grow) as i32;
    }

    result
}

/// Distribute a main-axis deficit proportionally to shrink weights.
pub fn calculate_flex_shrink(children: &[FlexChild], deficit: i32) -> Vec<i32> {
    let mut result = vec![0; children.len()];

    if deficit <= 0 {
        return result;
    }

    let total_shrink: f64 = children.iter().map(|child| child.flex_shrink).sum();
    if total_shrink == 0.0 {
        return result;
    }

    for (i, child) in children.iter().enumerate() {
        result[i] = (deficit as f64 * child.flex_shrink / total_shrink) as i32;
    }

    result
}

/// Shift positioned siblings on the cross axis once the parent's cross
/// extent is known. Operates in place on each child's layout.
pub fn align_items(children: &mut [LayoutTree<'_>], props: &ContainerProps, cross_size: i32) {
    for child in children.iter_mut() {
        if props.direction == Direction::Column {
            match props.align_items {
                Align::Start => {}
                Align::Center => {
                    child.layout.x = (cross_size - child.layout.width) / 2;
                }
                Align::End => {
                    child.layout.x = cross_size - child.layout.width;
                }
                Align::Stretch => {
                    child.layout.width = cross_size;
                }
            }
        } else {
            match props.align_items {
                Align::Start => {}
                Align::Center => {
                    child.layout.y = (cross_size - child.layout.height) / 2;
                }
                Align::End => {
                    child.layout.y = cross_size - child.layout.height;
                }
                Align::Stretch => {
                    child.layout.height = cross_size;
                }
            }
        }
    }
}

/// Redistribute positioned siblings along the main axis.
pub fn justify_content(children: &mut [LayoutTree<'_>], props: &ContainerProps, main_size: i32) {
    if children.is_empty() {
        return;
    }

    if props.direction == Direction::Column {
        justify_column(children, props, main_size);
    } else {
        justify_row(children, props, main_size);
    }
}

fn justify_column(children: &mut [LayoutTree<'_>], props: &ContainerProps, main_size: i32) {
    match props.justify_content {
        Justify::Start => {}
        Justify::Center => {
            let offset = (main_size - total_height(children)) / 2;
            for child in children.iter_mut() {
                child.layout.y += offset;
            }
        }
        Justify::End => {
            let offset = main_size - total_height(children);
            for child in children.iter_mut() {
                child.layout.y += offset;
            }
        }
        Justify::SpaceBetween => {
            if children.len() <= 1 {
                return;
            }
            let space = (main_size - total_height(children)) / (children.len() as i32 - 1);
            for i in 1..children.len() {
                children[i].layout.y = children[i - 1].layout.bottom() + space;
            }
        }
        Justify::SpaceAround => {
            // Assumes siblings share a main-axis extent; spacing is uneven
            // with mixed sizes.
            let space = (main_size - total_height(children)) / children.len() as i32;
            let half_space = space / 2;
            for (i, child) in children.iter_mut().enumerate() {
                child.layout.y = half_space + i as i32 * (child.layout.height + space);
            }
        }
    }
}

fn justify_row(children: &mut [LayoutTree<'_>], props: &ContainerProps, main_size: i32) {
    match props.justify_content {
        Justify::Start => {}
        Justify::Center => {
            let offset = (main_size - total_width(children)) / 2;
            for child in children.iter_mut() {
                child.layout.x += offset;
            }
        }
        Justify::End => {
            let offset = main_size - total_width(children);
            for child in children.iter_mut() {
                child.layout.x += offset;
            }
        }
        Justify::SpaceBetween => {
            if children.len() <= 1 {
                return;
            }
            let space = (main_size - total_width(children)) / (children.len() as i32 - 1);
            for i in 1..children.len() {
                children[i].layout.x = children[i - 1].layout.right() + space;
            }
        }
        Justify::SpaceAround => {
            let space = (main_size - total_width(children)) / children.len() as i32;
            let half_space = space / 2;
            for (i, child) in children.iter_mut().enumerate() {
                child.layout.x = half_space + i as i32 * (child.layout.width + space);
            }
        }
    }
}

/// Main-axis span of a sibling group: last child's end minus first child's
/// start.
fn total_height(children: &[LayoutTree<'_>]) -> i32 {
    match (children.first(), children.last()) {
        (Some(first), Some(last)) => last.layout.bottom() - first.layout.y,
        _ => 0,
    }
}

fn total_width(children: &[LayoutTree<'_>]) -> i32 {
    match (children.first(), children.last()) {
        (Some(first), Some(last)) => last.layout.right() - first.layout.x,
        _ => 0,
    }
}
