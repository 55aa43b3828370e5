//! ANSI cursor and screen control sequences.
//!
//! Small helpers returning owned `String`s so the frame renderer and
//! drivers can compose sequences without hand-rolling escape codes.

const CSI: &str = "\x1b[";

/// Move the cursor to an absolute 1-based `row` and `column`.
pub fn move_to(row: u16, column: u16) -> String {
    format!("{CSI}{row};{column}H")
}

/// Move the cursor to the top-left corner.
pub fn home() -> String {
    format!("{CSI}H")
}

/// Clear the whole screen without moving the cursor.
pub fn clear_screen() -> String {
    format!("{CSI}2J")
}

/// Clear from the cursor to the end of the current line.
pub fn clear_to_line_end() -> String {
    format!("{CSI}K")
}

/// Hide the cursor.
pub fn hide() -> &'static str {
    "\x1b[?25l"
}

/// Show the cursor.
pub fn show() -> &'static str {
    "\x1b[?25h"
}
