//! ANSI-aware display width helpers.
//!
//! The layout engine measures text by rune count, but the renderer pads and
//! frames content by terminal display columns. These helpers strip escape
//! sequences before measuring so styled output stays aligned.

/// Remove all ANSI escape sequences, returning only the visible text.
pub fn strip_ansi(text: &str) -> String {
    let clean = strip_ansi_escapes::strip(text);
    String::from_utf8_lossy(&clean).into_owned()
}

/// Display width of a string in terminal columns, excluding ANSI escapes.
pub fn display_width(text: &str) -> usize {
    unicode_width::UnicodeWidthStr::width(strip_ansi(text).as_str())
}

/// Width of the widest line of rendered output, excluding ANSI escapes.
pub fn visual_width(output: &str) -> usize {
    output.lines().map(display_width).max().unwrap_or(0)
}

/// Number of lines in rendered output. Empty input has zero lines.
pub fn visual_height(output: &str) -> usize {
    if output.is_empty() {
        return 0;
    }
    output.split('\n').count()
}
