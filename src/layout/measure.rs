use crate::component::{Component, ContainerProps};
use crate::geometry::Size;
use crate::types::{BorderStyle, Dimension, Direction, Spacing, WrapMode};

/// Resolve a dimension against the available extent.
///
/// `Auto` resolves to 0 so the caller's intrinsic size wins. `Percent`
/// truncates toward zero, matching plain integer division.
pub fn resolve_dimension(dim: Dimension, available: i32) -> i32 {
    match dim {
        Dimension::Fixed(value) => value,
        Dimension::Percent(percent) => available * percent / 100,
        Dimension::Auto => 0,
    }
}

/// Intrinsic size of text content under a wrap mode.
///
/// Width is the longest line's rune count, not its display width or byte
/// length. Word and char wrapping use a coarse estimate for measurement:
/// total runes over the available width, ignoring word boundaries.
pub fn measure_text(content: &str, wrap: WrapMode, available_width: i32) -> Size {
    if content.is_empty() {
        return Size::new(0, 0);
    }

    let lines: Vec<&str> = content.split('\n').collect();
    let height = lines.len() as i32;
    let width = lines
        .iter()
        .map(|line| line.chars().count() as i32)
        .max()
        .unwrap_or(0);

    if wrap == WrapMode::None {
        return Size::new(width, height);
    }

    if wrap == WrapMode::Truncate && width > available_width {
        return Size::new(available_width, height);
    }

    if (wrap == WrapMode::Word || wrap == WrapMode::Char)
        && width > available_width
        && available_width > 0
    {
        let total_runes: i32 = lines.iter().map(|line| line.chars().count() as i32).sum();
        let wrapped_height = (total_runes + available_width - 1) / available_width;
        return Size::new(available_width, wrapped_height);
    }

    Size::new(width, height)
}

/// Total horizontal spacing (left + right).
pub fn spacing_width(spacing: Spacing) -> i32 {
    spacing.left + spacing.right
}

/// Total vertical spacing (top + bottom).
pub fn spacing_height(spacing: Spacing) -> i32 {
    spacing.top + spacing.bottom
}

/// Cells a border adds per axis: (0, 0) for `None`, (2, 2) otherwise.
pub fn border_size(style: BorderStyle) -> (i32, i32) {
    if style == BorderStyle::None {
        return (0, 0);
    }
    (2, 2)
}

/// Clamp a size against min/max constraints. Zero means unset. Min is
/// checked before max on each axis, so a conflicting min > max resolves to
/// the max.
pub fn apply_constraints(
    mut size: Size,
    min_width: i32,
    min_height: i32,
    max_width: i32,
    max_height: i32,
) -> Size {
    if min_width > 0 && size.width < min_width {
        size.width = min_width;
    }
    if max_width > 0 && size.width > max_width {
        size.width = max_width;
    }
    if min_height > 0 && size.height < min_height {
        size.height = min_height;
    }
    if max_height > 0 && size.height > max_height {
        size.height = max_height;
    }
    size
}

/// Aggregate a container's size from its children.
///
/// An empty container collapses to 0x0 without picking up padding, margin,
/// or border. Otherwise children sum along the main axis (plus gaps) and
/// max along the cross axis; padding, margin, and border are added on top;
/// an explicit dimension that resolves positive overrides the aggregate;
/// min/max clamping runs last.
pub fn measure_box(
    props: &ContainerProps,
    children: &[Component],
    available_width: i32,
    available_height: i32,
) -> Size {
    if children.is_empty() {
        return Size::new(0, 0);
    }

    let mut total_width = 0;
    let mut total_height = 0;
    let mut max_width = 0;
    let mut max_height = 0;

    for (i, child) in children.iter().enumerate() {
        let child_size = child.measure(available_width, available_height);

        if props.direction == Direction::Row {
            total_width += child_size.width;
            if i > 0 && props.gap > 0 {
                total_width += props.gap;
            }
            if child_size.height > max_height {
                max_height = child_size.height;
            }
        } else {
            total_height += child_size.height;
            if i > 0 && props.gap > 0 {
                total_height += props.gap;
            }
            if child_size.width > max_width {
                max_width = child_size.width;
            }
        }
    }

    let (mut width, mut height) = if props.direction == Direction::Row {
        (total_width, max_height)
    } else {
        (max_width, total_height)
    };

    width += spacing_width(props.padding);
    height += spacing_height(props.padding);

    width += spacing_width(props.margin);
    height += spacing_height(props.margin);

    let (border_width, border_height) = border_size(props.border);
    width += border_width;
    height += border_height;

    let resolved_width = resolve_dimension(props.width, available_width);
    if resolved_width > 0 {
        width = resolved_width;
    }

    let resolved_height = resolve_dimension(props.height, available_height);
    if resolved_height > 0 {
        height = resolved_height;
    }

    apply_constraints(
        Size::new(width, height),
        props.min_width,
        props.min_height,
        props.max_width,
        props.max_height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::text;

    #[test]
    fn fixed_resolves_to_its_value() {
        assert_eq!(resolve_dimension(Dimension::Fixed(42), 0), 42);
        assert_eq!(resolve_dimension(Dimension::Fixed(42), 1000), 42);
    }

    #[test]
    fn percent_truncates_toward_zero() {
        assert_eq!(resolve_dimension(Dimension::Percent(50), 80), 40);
        assert_eq!(resolve_dimension(Dimension::Percent(33), 10), 3);
        assert_eq!(resolve_dimension(Dimension::Percent(0), 80), 0);
        assert_eq!(resolve_dimension(Dimension::Percent(100), 80), 80);
    }

    #[test]
    fn auto_defers_to_intrinsic_size() {
        assert_eq!(resolve_dimension(Dimension::Auto, 80), 0);
    }

    #[test]
    fn empty_text_is_zero() {
        assert_eq!(measure_text("", WrapMode::None, 80), Size::new(0, 0));
    }

    #[test]
    fn multiline_text_uses_longest_line() {
        let size = measure_text("ab\nabcde\nc", WrapMode::None, 80);
        assert_eq!(size.width, 5);
        assert_eq!(size.height, 3);
    }

    #[test]
    fn width_counts_runes_not_bytes() {
        let size = measure_text("héllo", WrapMode::None, 80);
        assert_eq!(size.width, 5);
    }

    #[test]
    fn wrap_none_ignores_available_width() {
        let size = measure_text("abcdefghij", WrapMode::None, 4);
        assert_eq!(size, Size::new(10, 1));
    }

    #[test]
    fn truncate_clamps_width_without_adding_lines() {
        let size = measure_text("abcdefghij\nklm", WrapMode::Truncate, 4);
        assert_eq!(size.width, 4);
        assert_eq!(size.height, 2);
    }

    #[test]
    fn word_wrap_estimates_height_from_total_runes() {
        // 10 runes over width 4 -> ceil(10/4) = 3 lines.
        let size = measure_text("abcdefghij", WrapMode::Word, 4);
        assert_eq!(size, Size::new(4, 3));

        let char_size = measure_text("abcdefghij", WrapMode::Char, 4);
        assert_eq!(char_size, Size::new(4, 3));
    }

    #[test]
    fn wrap_with_zero_available_width_is_left_alone() {
        let size = measure_text("abcdef", WrapMode::Word, 0);
        assert_eq!(size, Size::new(6, 1));
    }

    #[test]
    fn border_sizes() {
        assert_eq!(border_size(BorderStyle::None), (0, 0));
        assert_eq!(border_size(BorderStyle::Single), (2, 2));
        assert_eq!(border_size(BorderStyle::Double), (2, 2));
        assert_eq!(border_size(BorderStyle::Rounded), (2, 2));
    }

    #[test]
    fn constraints_clamp_both_ways() {
        let clamped = apply_constraints(Size::new(3, 30), 5, 0, 0, 20);
        assert_eq!(clamped.width, 5);
        assert_eq!(clamped.height, 20);
    }

    #[test]
    fn conflicting_min_max_resolves_to_max() {
        let clamped = apply_constraints(Size::new(1, 1), 10, 10, 4, 4);
        assert_eq!(clamped.width, 4);
        assert_eq!(clamped.height, 4);
    }

    #[test]
    fn empty_box_collapses_despite_decoration() {
        let props = ContainerProps {
            padding: Spacing::all(2),
            margin: Spacing::all(1),
            border: BorderStyle::Double,
            min_width: 5,
            min_height: 5,
            ..ContainerProps::default()
        };
        assert_eq!(measure_box(&props, &[], 80, 24), Size::new(0, 0));
    }

    #[test]
    fn column_aggregation_law() {
        let props = ContainerProps {
            direction: Direction::Column,
            gap: 2,
            padding: Spacing::all(1),
            margin: Spacing::all(1),
            border: BorderStyle::Single,
            ..ContainerProps::default()
        };
        let children = vec![text("a"), text("b")];
        let size = measure_box(&props, &children, 80, 24);
        // width: max(1,1) + 2 padding + 2 margin + 2 border = 8
        // height: 1+1 children + 2 gap + 2 padding + 2 margin + 2 border = 10
        assert_eq!(size.width, 8);
        assert_eq!(size.height, 10);
    }

    #[test]
    fn row_aggregation_is_the_transposed_law() {
        let props = ContainerProps {
            direction: Direction::Row,
            gap: 3,
            ..ContainerProps::default()
        };
        let children = vec![text("ab"), text("cde"), text("f")];
        let size = measure_box(&props, &children, 80, 24);
        assert_eq!(size.width, 2 + 3 + 3 + 3 + 1);
        assert_eq!(size.height, 1);
    }

    #[test]
    fn explicit_dimension_overrides_aggregate() {
        let props = ContainerProps {
            width: Dimension::Fixed(40),
            height: Dimension::Percent(50),
            ..ContainerProps::default()
        };
        let children = vec![text("hello")];
        let size = measure_box(&props, &children, 80, 24);
        assert_eq!(size.width, 40);
        assert_eq!(size.height, 12);
    }

    #[test]
    fn auto_and_zero_percent_leave_aggregate_intact() {
        let props = ContainerProps {
            width: Dimension::Auto,
            height: Dimension::Percent(0),
            ..ContainerProps::default()
        };
        let children = vec![text("hello")];
        let size = measure_box(&props, &children, 80, 24);
        assert_eq!(size.width, 5);
        assert_eq!(size.height, 1);
    }

    #[test]
    fn constraints_apply_after_explicit_override() {
        let props = ContainerProps {
            width: Dimension::Fixed(100),
            max_width: 60,
            ..ContainerProps::default()
        };
        let children = vec![text("x")];
        let size = measure_box(&props, &children, 80, 24);
        assert_eq!(size.width, 60);
    }
}
