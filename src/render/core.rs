use std::io::Write;

use blake3::Hash;

use crate::component::{Component, ContainerProps, TextProps};
use crate::cursor;
use crate::error::Result;
use crate::geometry::Layout;
use crate::layout::LayoutTree;
use crate::render::style::{Style, border_glyphs};
use crate::statics::StaticBuffer;
use crate::types::{Direction, TextAlign, WrapMode};
use crate::width::display_width;

/// Mutable state threaded through a render pass.
///
/// Replaces ambient globals: the static buffer travels with the call.
pub struct RenderContext<'a> {
    pub statics: &'a mut StaticBuffer,
}

impl<'a> RenderContext<'a> {
    pub fn new(statics: &'a mut StaticBuffer) -> Self {
        Self { statics }
    }
}

impl Component {
    /// Render this node as a styled string within `layout`.
    ///
    /// Containers rendered directly reuse `layout` for every child; the
    /// tree walker below substitutes each child's computed layout instead.
    pub fn render(&self, layout: Layout, ctx: &mut RenderContext<'_>) -> String {
        match self {
            Self::Text(props) => render_text(props, layout),
            Self::Container(props, children) => {
                let parts: Vec<String> = children
                    .iter()
                    .map(|child| child.render(layout, ctx))
                    .collect();
                decorate_container(props, join_parts(props.direction, parts))
            }
            Self::Static(props, items) => {
                let lines: Vec<String> = items
                    .iter()
                    .map(|item| item.render(layout, ctx))
                    .collect();
                emit_static(&props.key, lines, ctx)
            }
            Self::Custom(widget) => widget.render(layout),
        }
    }
}

/// Walk a positioned tree, rendering each node within its resolved layout
/// and concatenating children per the parent's direction.
pub fn render_tree(tree: &LayoutTree<'_>, ctx: &mut RenderContext<'_>) -> String {
    match tree.component {
        Component::Container(props, _) => {
            let parts: Vec<String> = tree
                .children
                .iter()
                .map(|child| render_tree(child, ctx))
                .collect();
            decorate_container(props, join_parts(props.direction, parts))
        }
        leaf => leaf.render(tree.layout, ctx),
    }
}

fn join_parts(direction: Direction, parts: Vec<String>) -> String {
    match direction {
        Direction::Row => parts.concat(),
        Direction::Column => parts.join("\n"),
    }
}

fn render_text(props: &TextProps, layout: Layout) -> String {
    let style = Style {
        fg: props.color,
        bg: props.background,
        bold: props.bold,
        italic: props.italic,
        underline: props.underline,
        strikethrough: props.strikethrough,
    };

    let lines: Vec<String> = props
        .content
        .split('\n')
        .map(|line| {
            let mut line = line.to_string();
            if props.wrap == WrapMode::Truncate && layout.width > 0 {
                line = truncate_columns(&line, layout.width as usize);
            }
            if layout.width > 0 {
                line = pad_line(&line, layout.width as usize, props.align);
            }
            line
        })
        .collect();

    style.apply(&lines.join("\n"))
}

fn truncate_columns(line: &str, width: usize) -> String {
    let mut out = String::new();
    for ch in line.chars() {
        let candidate = format!("{out}{ch}");
        if display_width(&candidate) > width {
            break;
        }
        out = candidate;
    }
    out
}

fn pad_line(line: &str, width: usize, align: TextAlign) -> String {
    let current = display_width(line);
    if current >= width {
        return line.to_string();
    }

    let missing = width - current;
    match align {
        TextAlign::Left => format!("{line}{}", " ".repeat(missing)),
        TextAlign::Right => format!("{}{line}", " ".repeat(missing)),
        TextAlign::Center => {
            let before = missing / 2;
            let after = missing - before;
            format!("{}{line}{}", " ".repeat(before), " ".repeat(after))
        }
    }
}

/// Apply background and border framing to a container's joined content.
fn decorate_container(props: &ContainerProps, content: String) -> String {
    if content.is_empty() {
        return content;
    }

    let inner_width = content.lines().map(display_width).max().unwrap_or(0);
    let body_style = match props.background {
        Some(background) => Style::new().bg(background),
        None => Style::new(),
    };

    let body: Vec<String> = content
        .split('\n')
        .map(|line| {
            let padded = pad_line(line, inner_width, TextAlign::Left);
            body_style.apply(&padded)
        })
        .collect();

    let Some(glyphs) = border_glyphs(props.border) else {
        return body.join("\n");
    };

    let frame_style = match props.border_color {
        Some(color) => Style::new().fg(color),
        None => Style::new(),
    };

    let horizontal: String = std::iter::repeat(glyphs.horizontal)
        .take(inner_width)
        .collect();
    let top = frame_style.apply(&format!(
        "{}{horizontal}{}",
        glyphs.top_left, glyphs.top_right
    ));
    let bottom = frame_style.apply(&format!(
        "{}{horizontal}{}",
        glyphs.bottom_left, glyphs.bottom_right
    ));
    let vertical = frame_style.apply(&glyphs.vertical.to_string());

    let mut framed = Vec::with_capacity(body.len() + 2);
    framed.push(top);
    for line in body {
        framed.push(format!("{vertical}{line}{vertical}"));
    }
    framed.push(bottom);
    framed.join("\n")
}

fn emit_static(key: &str, lines: Vec<String>, ctx: &mut RenderContext<'_>) -> String {
    let accepted = ctx.statics.append(key, &lines);
    if accepted == 0 {
        return String::new();
    }
    if accepted < lines.len() {
        return lines[lines.len() - accepted..].join("\n");
    }
    lines.join("\n")
}

/// Compose the frame from accumulated static output and the dynamic UI.
pub fn compose_frame(static_content: &str, dynamic_content: &str) -> String {
    if static_content.is_empty() {
        return dynamic_content.to_string();
    }
    if dynamic_content.is_empty() {
        return static_content.to_string();
    }
    format!("{static_content}\n{dynamic_content}")
}

/// Writes composed frames to the terminal, skipping identical repaints.
///
/// weft repaints the whole frame rather than diffing regions, so change
/// detection is a single content hash per frame.
pub struct FrameRenderer {
    last_hash: Option<Hash>,
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameRenderer {
    pub fn new() -> Self {
        Self { last_hash: None }
    }

    /// Write `frame`, homing the cursor and clearing first. Returns whether
    /// anything was written.
    pub fn draw(&mut self, writer: &mut impl Write, frame: &str) -> Result<bool> {
        let hash = blake3::hash(frame.as_bytes());
        if self.last_hash == Some(hash) {
            return Ok(false);
        }
        self.last_hash = Some(hash);

        write!(writer, "{}{}", cursor::home(), cursor::clear_screen())?;
        for (row, line) in frame.split('\n').enumerate() {
            write!(writer, "{}{line}", cursor::move_to(row as u16 + 1, 1))?;
        }
        writer.flush()?;
        Ok(true)
    }

    /// Force the next draw to repaint even if the frame is unchanged.
    pub fn invalidate(&mut self) {
        self.last_hash = None;
    }
}
