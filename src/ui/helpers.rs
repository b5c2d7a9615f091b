//! Shared rendering utilities.
//!
//! Low-level helpers used across the UI components: cursor positioning and
//! padded line printing. All output goes to stdout via ANSI escape
//! sequences; nothing here manages screen clearing or raw mode, which belong
//! to the runtime shim.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
///
/// # Example
///
/// ```
/// use bookgrid::ui::helpers::position_cursor;
///
/// position_cursor(5, 1); // Move to start of row 5
/// print!("Content at row 5");
/// ```
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Prints text padded with spaces to an exact visual width.
///
/// Truncation is assumed to have happened upstream (the view model carries
/// pre-truncated text); this only pads short text so that styled backgrounds
/// span the full width.
pub fn print_padded(text: &str, width: usize) {
    print!("{text}");
    print!("{}", " ".repeat(width.saturating_sub(text.chars().count())));
}

/// Prints a centered line in the given color, padding both sides.
pub fn print_centered(text: &str, color: &str, cols: usize) {
    let len = text.chars().count().min(cols);
    let padding = (cols.saturating_sub(len)) / 2;

    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + len)));
    print!("{}", Theme::reset());
}
