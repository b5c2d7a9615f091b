//! Empty state component renderer.
//!
//! This module renders the message shown instead of the grid while the
//! startup fetch is in flight and when no books are available. A failed
//! fetch shows exactly the same "no books" message as a genuinely empty
//! result.

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message.
///
/// Displays a centered two-line message. The message uses the
/// `empty_state_fg` theme color; the subtitle uses `text_dim` with dim
/// styling. The message is positioned at row 6, with the subtitle at row 7.
///
/// # Parameters
///
/// * `empty` - Empty state information (message and subtitle)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, cols: usize) {
    position_cursor(6, 1);
    print_centered(&empty.message, &theme.colors.empty_state_fg, cols);

    position_cursor(7, 1);
    print!("{}", Theme::dim());
    print_centered(&empty.subtitle, &theme.colors.text_dim, cols);
    print!("{}", Theme::reset());
}
