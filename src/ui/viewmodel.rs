//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information: which face each cell shows, the
//! joined authors line, truncated text, and selection state. They contain no
//! business logic.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed
//! by the renderer. Because a fresh view model is derived from current state
//! on every render, a cell never carries visuals left over from an earlier
//! bind.

use crate::app::state::ImageStatus;

/// Complete UI view model for one render.
///
/// Contains all display information needed to draw the screen: the windowed
/// grid, header and footer text, and an optional empty-state message that
/// replaces the grid entirely.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Visible grid rows, windowed around the selection.
    pub grid_rows: Vec<GridRow>,

    /// Header information (query, result count).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// Optional empty state message (while loading or with no results).
    pub empty_state: Option<EmptyState>,
}

/// One visible row of the grid, holding up to two cells.
#[derive(Debug, Clone)]
pub struct GridRow {
    /// Cells in left-to-right order; the last row may hold a single cell.
    pub cells: Vec<CellView>,
}

/// Display information for a single grid cell.
///
/// One cell per book. The `face` is re-derived from toggle state on every
/// render; the authors line is present regardless of face.
#[derive(Debug, Clone)]
pub struct CellView {
    /// Grid position of this cell (index into the book list).
    pub position: usize,

    /// Which face is up and its pre-truncated text.
    pub face: CellFace,

    /// Authors joined by ", ", possibly empty.
    pub authors_line: String,

    /// Whether this cell is currently selected.
    pub is_selected: bool,
}

/// The visible face of a grid cell.
#[derive(Debug, Clone)]
pub enum CellFace {
    /// Collapsed (the default): the cover is shown, title and description
    /// are hidden.
    Cover {
        /// Secure thumbnail URL, possibly empty when the book has no cover.
        url: String,

        /// Download status; `None` when the book has no cover to load.
        status: Option<ImageStatus>,
    },

    /// Expanded: title and description are shown, the cover is hidden.
    Text {
        /// Book title.
        title: String,

        /// Book description, possibly empty.
        description: String,
    },
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
///
/// Shown while the startup fetch is in flight and when the result is empty
/// (genuinely or because a failure collapsed to empty).
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No books to display").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
