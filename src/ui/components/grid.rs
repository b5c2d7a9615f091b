//! Grid component renderer.
//!
//! This module renders the two-column book grid. Each cell occupies a fixed
//! number of terminal lines: a face line (cover label or title), a detail
//! line (thumbnail URL or description), the always-visible authors line, and
//! a blank separator. Which face a cell shows comes entirely from the view
//! model; nothing is patched incrementally between renders.

use crate::app::state::{CELL_HEIGHT, GRID_COLUMNS, ImageStatus};
use crate::ui::components::GRID_START_ROW;
use crate::ui::helpers::{position_cursor, print_padded};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CellFace, CellView, GridRow};

/// Renders all visible grid rows starting below the header chrome.
///
/// # Parameters
///
/// * `rows` - Windowed grid rows from the view model
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns (split across [`GRID_COLUMNS`])
pub fn render_grid(rows: &[GridRow], theme: &Theme, cols: usize) {
    let column_width = cols / GRID_COLUMNS;
    let cell_width = column_width.saturating_sub(2);

    for (row_index, row) in rows.iter().enumerate() {
        let base_row = GRID_START_ROW + row_index * CELL_HEIGHT;
        for (col_index, cell) in row.cells.iter().enumerate() {
            let base_col = 1 + col_index * column_width;
            render_cell(cell, base_row, base_col, cell_width, theme);
        }
    }
}

/// Renders a single cell at its terminal position.
///
/// # Layout
///
/// ```text
/// [face line]    "[cover] loading" or bold title
/// [detail line]  thumbnail URL or description
/// [authors line] always rendered, joined by ", "
/// ```
///
/// The face line carries the selection background when the cell is selected.
fn render_cell(cell: &CellView, base_row: usize, base_col: usize, width: usize, theme: &Theme) {
    position_cursor(base_row, base_col);
    if cell.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    }

    match &cell.face {
        CellFace::Cover { status, .. } => {
            if !cell.is_selected {
                print!("{}", Theme::fg(&theme.colors.cover_fg));
            }
            print_padded(&cover_label(*status), width);
        }
        CellFace::Text { title, .. } => {
            print!("{}", Theme::bold());
            if !cell.is_selected {
                print!("{}", Theme::fg(&theme.colors.title_fg));
            }
            print_padded(title, width);
        }
    }
    print!("{}", Theme::reset());

    position_cursor(base_row + 1, base_col);
    match &cell.face {
        CellFace::Cover { url, status } => {
            let color = match status {
                Some(ImageStatus::Loaded) => &theme.colors.cover_loaded_fg,
                Some(ImageStatus::Failed) => &theme.colors.cover_failed_fg,
                Some(ImageStatus::Loading) | None => &theme.colors.text_dim,
            };
            print!("{}", Theme::fg(color));
            print_padded(url, width);
        }
        CellFace::Text { description, .. } => {
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print_padded(description, width);
        }
    }
    print!("{}", Theme::reset());

    position_cursor(base_row + 2, base_col);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_padded(&cell.authors_line, width);
    print!("{}", Theme::reset());
}

/// Text for the cover face line, reflecting the download status.
fn cover_label(status: Option<ImageStatus>) -> String {
    match status {
        Some(ImageStatus::Loading) => "[cover] loading".to_string(),
        Some(ImageStatus::Loaded) => "[cover]".to_string(),
        Some(ImageStatus::Failed) => "[cover] unavailable".to_string(),
        None => "[no cover]".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_label_reflects_status() {
        assert_eq!(cover_label(Some(ImageStatus::Loading)), "[cover] loading");
        assert_eq!(cover_label(Some(ImageStatus::Loaded)), "[cover]");
        assert_eq!(
            cover_label(Some(ImageStatus::Failed)),
            "[cover] unavailable"
        );
        assert_eq!(cover_label(None), "[no cover]");
    }
}
