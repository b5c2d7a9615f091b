//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with query and result count
//! - [`footer`]: Keybinding hints
//! - [`grid`]: The two-column book grid
//! - [`empty`]: Empty state message (loading / no results)
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Grid rows or empty state]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod grid;
mod header;

pub use empty::render_empty_state;
pub use grid::render_grid;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UiViewModel;

use footer::render_footer;
use header::render_header;

/// First terminal row available to the grid (below blank line, header, and
/// border).
pub const GRID_START_ROW: usize = 4;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/grid, grid/footer).
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the chrome surrounding the grid: header, borders, and footer.
///
/// # Line accounting
///
/// Reserves 6 lines (blank, header, two borders, footer, spare); the rows in
/// between belong to the grid or the empty state.
pub fn render_chrome(vm: &UiViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    let _current_row = render_border(current_row, &theme.colors.border, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
