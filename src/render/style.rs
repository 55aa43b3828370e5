//! SGR styling and border glyph tables.

use crate::types::{BorderStyle, Color};

const CSI: &str = "\x1b[";
const RESET: &str = "\x1b[0m";

/// Accumulated text attributes emitted as one SGR sequence per line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self, on: bool) -> Self {
        self.bold = on;
        self
    }

    pub fn italic(mut self, on: bool) -> Self {
        self.italic = on;
        self
    }

    pub fn underline(mut self, on: bool) -> Self {
        self.underline = on;
        self
    }

    pub fn strikethrough(mut self, on: bool) -> Self {
        self.strikethrough = on;
        self
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    fn sgr_params(&self) -> String {
        let mut params: Vec<String> = Vec::new();
        if self.bold {
            params.push("1".to_string());
        }
        if self.italic {
            params.push("3".to_string());
        }
        if self.underline {
            params.push("4".to_string());
        }
        if self.strikethrough {
            params.push("9".to_string());
        }
        if let Some(color) = self.fg {
            params.push(color_params(color, 38));
        }
        if let Some(color) = self.bg {
            params.push(color_params(color, 48));
        }
        params.join(";")
    }

    /// Wrap `text` in this style, resetting at the end of every line so
    /// attributes never bleed into neighboring cells.
    pub fn apply(&self, text: &str) -> String {
        if self.is_plain() || text.is_empty() {
            return text.to_string();
        }

        let params = self.sgr_params();
        text.split('\n')
            .map(|line| format!("{CSI}{params}m{line}{RESET}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn color_params(color: Color, plane: u8) -> String {
    match color {
        Color::Ansi(index) => format!("{plane};5;{index}"),
        Color::Rgb(r, g, b) => format!("{plane};2;{r};{g};{b}"),
    }
}

/// Glyph set used to frame a bordered container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

const SINGLE: BorderGlyphs = BorderGlyphs {
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    horizontal: '─',
    vertical: '│',
};

const DOUBLE: BorderGlyphs = BorderGlyphs {
    top_left: '╔',
    top_right: '╗',
    bottom_left: '╚',
    bottom_right: '╝',
    horizontal: '═',
    vertical: '║',
};

const ROUNDED: BorderGlyphs = BorderGlyphs {
    top_left: '╭',
    top_right: '╮',
    bottom_left: '╰',
    bottom_right: '╯',
    horizontal: '─',
    vertical: '│',
};

/// Glyphs for a border style, or `None` when the box is unframed.
pub fn border_glyphs(style: BorderStyle) -> Option<BorderGlyphs> {
    match style {
        BorderStyle::None => None,
        BorderStyle::Single => Some(SINGLE),
        BorderStyle::Double => Some(DOUBLE),
        BorderStyle::Rounded => Some(ROUNDED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::width::strip_ansi;

    #[test]
    fn plain_style_passes_text_through() {
        assert_eq!(Style::new().apply("hello"), "hello");
    }

    #[test]
    fn bold_red_emits_sgr_and_reset() {
        let styled = Style::new().bold(true).fg(Color::Ansi(196)).apply("hi");
        assert_eq!(styled, "\x1b[1;38;5;196mhi\x1b[0m");
        assert_eq!(strip_ansi(&styled), "hi");
    }

    #[test]
    fn rgb_colors_use_truecolor_params() {
        let styled = Style::new().bg(Color::Rgb(10, 20, 30)).apply("x");
        assert!(styled.contains("48;2;10;20;30"));
    }

    #[test]
    fn each_line_is_wrapped_separately() {
        let styled = Style::new().underline(true).apply("a\nb");
        let lines: Vec<&str> = styled.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("\x1b[0m"));
        assert!(lines[1].starts_with("\x1b[4m"));
    }

    #[test]
    fn glyph_tables_cover_all_framed_styles() {
        assert!(border_glyphs(BorderStyle::None).is_none());
        assert_eq!(border_glyphs(BorderStyle::Single).unwrap().top_left, '┌');
        assert_eq!(border_glyphs(BorderStyle::Double).unwrap().horizontal, '═');
        assert_eq!(border_glyphs(BorderStyle::Rounded).unwrap().top_left, '╭');
    }
}
