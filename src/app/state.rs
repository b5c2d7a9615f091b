//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! screen, along with selection movement and UI view model generation. It is
//! the single source of truth for all transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates the immutable fetched data (the book list) from the
//! state that mutates afterwards (toggle flags, image load status, selection).
//! View models are computed on demand from state snapshots: every render
//! re-derives each cell's visible face from current toggle state, so a cell
//! re-bound after scrolling can never show visuals left over from a
//! previously bound book.
//!
//! # State components
//!
//! - **Books**: Mapped search results, set once when the fetch completes
//! - **Toggles**: Per-position expanded flags ([`crate::app::ToggleState`])
//! - **Image status**: Per-position cover download progress
//! - **Selection**: Current cursor position within the grid
//! - **Load phase**: Whether the startup fetch is still in flight
//! - **Fetch generation**: Tag used to drop stale worker responses

use crate::app::toggle::ToggleState;
use crate::domain::Book;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CellFace, CellView, EmptyState, FooterInfo, GridRow, HeaderInfo, UiViewModel};
use std::collections::HashMap;

/// Number of grid columns.
pub const GRID_COLUMNS: usize = 2;

/// Terminal lines occupied by one grid cell (three content lines plus a
/// blank separator).
pub const CELL_HEIGHT: usize = 4;

/// Lines reserved for chrome around the grid (blank line, header, two
/// borders, footer, spare).
const CHROME_LINES: usize = 6;

/// Download progress of one cell's cover image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageStatus {
    /// The download has been requested but has not finished.
    Loading,
    /// The cover bytes arrived.
    Loaded,
    /// The download failed; logged only, the cell keeps rendering.
    Failed,
}

/// Whether the startup fetch has delivered its result yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// The single background fetch is still in flight.
    Loading,
    /// The fetch completed (possibly with an empty or collapsed-to-empty
    /// result); the list will not change again.
    Ready,
}

/// Central application state container.
///
/// Holds all transient UI state. Mutated by the event handler in response to
/// user input and worker responses; read by view model computation.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Query string the startup fetch was issued with (shown in the header).
    pub query: String,

    /// Mapped search results in response order.
    ///
    /// Set once when the fetch completes and immutable afterwards; only
    /// toggle flags and image status mutate for the rest of the screen's
    /// lifetime.
    pub books: Vec<Book>,

    /// Per-position expanded flags.
    pub toggles: ToggleState,

    /// Per-position cover download status.
    ///
    /// Entries exist only for positions whose book has a cover URL.
    pub image_status: HashMap<usize, ImageStatus>,

    /// Zero-based index of the selected cell within `books`.
    pub selected_index: usize,

    /// Whether the startup fetch has completed.
    pub load_phase: LoadPhase,

    /// Generation of the most recently spawned fetch.
    ///
    /// Worker responses carrying any other generation are dropped by the
    /// event handler.
    pub fetch_generation: u64,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a new application state awaiting the startup fetch.
    ///
    /// # Example
    ///
    /// ```
    /// use bookgrid::app::AppState;
    /// use bookgrid::ui::Theme;
    ///
    /// let state = AppState::new("android".to_string(), Theme::default());
    /// assert!(state.books.is_empty());
    /// assert_eq!(state.selected_index, 0);
    /// ```
    #[must_use]
    pub fn new(query: String, theme: Theme) -> Self {
        Self {
            query,
            books: Vec::new(),
            toggles: ToggleState::new(),
            image_status: HashMap::new(),
            selected_index: 0,
            load_phase: LoadPhase::Loading,
            fetch_generation: 0,
            theme,
        }
    }

    /// Advances and returns the fetch generation.
    ///
    /// Called by the runtime immediately before spawning a fetch, so every
    /// response can be matched against the generation current at spawn time.
    pub fn next_generation(&mut self) -> u64 {
        self.fetch_generation += 1;
        self.fetch_generation
    }

    /// Installs the fetched book list and seeds cover download status.
    ///
    /// The list is final: it is never refreshed for the lifetime of the
    /// screen. Positions with a cover URL start in [`ImageStatus::Loading`];
    /// positions without one get no status entry.
    pub fn set_books(&mut self, books: Vec<Book>) {
        self.image_status = books
            .iter()
            .enumerate()
            .filter(|(_, book)| book.has_cover())
            .map(|(position, _)| (position, ImageStatus::Loading))
            .collect();

        self.books = books;
        self.load_phase = LoadPhase::Ready;
        self.selected_index = 0;
    }

    /// Records the outcome of one cover download.
    ///
    /// Touches only the given position; every other cell is unaffected.
    pub fn mark_image(&mut self, position: usize, status: ImageStatus) {
        if position < self.books.len() {
            self.image_status.insert(position, status);
        }
    }

    /// Moves selection to the next cell, wrapping to the first.
    ///
    /// No-op while the book list is empty.
    pub fn move_selection_down(&mut self) {
        if self.books.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.books.len();
    }

    /// Moves selection to the previous cell, wrapping to the last.
    ///
    /// No-op while the book list is empty.
    pub fn move_selection_up(&mut self) {
        if self.books.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.books.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the selected grid position, if any cell exists.
    #[must_use]
    pub fn selected_position(&self) -> Option<usize> {
        if self.books.is_empty() {
            None
        } else {
            Some(self.selected_index.min(self.books.len() - 1))
        }
    }

    /// Computes a renderable view model from current state and terminal size.
    ///
    /// Windows the grid around the selected cell's row, then derives each
    /// visible cell's face from current toggle state: expanded cells show
    /// title and description and hide the cover; collapsed cells show the
    /// cover face and hide title and description. The authors line is
    /// present on every cell regardless of face.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UiViewModel {
        let _span = tracing::debug_span!(
            "compute_viewmodel",
            book_count = self.books.len(),
            selected = self.selected_index,
        )
        .entered();

        if let Some(empty_state) = self.compute_empty_state() {
            return UiViewModel {
                grid_rows: vec![],
                header: self.compute_header(),
                footer: Self::compute_footer(),
                empty_state: Some(empty_state),
            };
        }

        let visible_rows = ((rows.saturating_sub(CHROME_LINES)) / CELL_HEIGHT).max(1);
        let total_rows = self.books.len().div_ceil(GRID_COLUMNS);
        let selected_row = self.selected_index / GRID_COLUMNS;

        let mut start_row = selected_row.saturating_sub(visible_rows / 2);
        let end_row = (start_row + visible_rows).min(total_rows);
        if end_row - start_row < visible_rows && total_rows >= visible_rows {
            start_row = end_row.saturating_sub(visible_rows);
        }

        let cell_width = (cols / GRID_COLUMNS).saturating_sub(2);
        let grid_rows = (start_row..end_row)
            .map(|row| GridRow {
                cells: (0..GRID_COLUMNS)
                    .map(|col| row * GRID_COLUMNS + col)
                    .filter(|position| *position < self.books.len())
                    .map(|position| self.compute_cell(position, cell_width))
                    .collect(),
            })
            .collect();

        UiViewModel {
            grid_rows,
            header: self.compute_header(),
            footer: Self::compute_footer(),
            empty_state: None,
        }
    }

    /// Computes one cell's view from current state.
    ///
    /// The binding is re-entrant: everything shown is re-read from state
    /// here, nothing is carried over from an earlier bind of the same
    /// position.
    fn compute_cell(&self, position: usize, cell_width: usize) -> CellView {
        let book = &self.books[position];

        let face = if self.toggles.is_expanded(position) {
            CellFace::Text {
                title: truncate_to(&book.title, cell_width),
                description: truncate_to(&book.description, cell_width),
            }
        } else {
            CellFace::Cover {
                url: truncate_to(&book.image_url, cell_width),
                status: self.image_status.get(&position).copied(),
            }
        };

        CellView {
            position,
            face,
            authors_line: truncate_to(&book.authors_line(), cell_width),
            is_selected: position == self.selected_index,
        }
    }

    /// Returns the empty-state message for the current phase, if any.
    ///
    /// Every fetch failure collapses to the same "no books" message as a
    /// genuinely empty result; the distinction lives only in the log file.
    fn compute_empty_state(&self) -> Option<EmptyState> {
        match self.load_phase {
            LoadPhase::Loading => Some(EmptyState {
                message: "Searching books".to_string(),
                subtitle: format!("query \"{}\"", self.query),
            }),
            LoadPhase::Ready if self.books.is_empty() => Some(EmptyState {
                message: "No books to display".to_string(),
                subtitle: "the search returned nothing".to_string(),
            }),
            LoadPhase::Ready => None,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" Books: \"{}\" ({}) ", self.query, self.books.len()),
        }
    }

    fn compute_footer() -> FooterInfo {
        FooterInfo {
            keybindings: "j/k or arrows: navigate  Enter/Space: flip cover/details  q: quit"
                .to_string(),
        }
    }
}

/// Truncates text to a display width, appending "..." when cut.
fn truncate_to(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    let keep = max_width.saturating_sub(3);
    let kept: String = text.chars().take(keep).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, image_url: &str) -> Book {
        Book::new(
            title.to_string(),
            vec!["A1".to_string()],
            "D".to_string(),
            image_url.to_string(),
        )
    }

    fn loaded_state(count: usize) -> AppState {
        let mut state = AppState::new("android".to_string(), Theme::default());
        let books = (0..count)
            .map(|i| book(&format!("Book {i}"), "https://img/x.png"))
            .collect();
        state.set_books(books);
        state
    }

    #[test]
    fn selection_wraps_both_directions() {
        let mut state = loaded_state(3);

        state.move_selection_up();
        assert_eq!(state.selected_index, 2);

        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn selection_is_noop_while_empty() {
        let mut state = AppState::new("android".to_string(), Theme::default());
        state.move_selection_down();
        state.move_selection_up();
        assert_eq!(state.selected_index, 0);
        assert!(state.selected_position().is_none());
    }

    #[test]
    fn set_books_seeds_image_status_for_covered_cells_only() {
        let mut state = AppState::new("android".to_string(), Theme::default());
        state.set_books(vec![book("With", "https://img/1.png"), book("Without", "")]);

        assert_eq!(state.image_status.get(&0), Some(&ImageStatus::Loading));
        assert_eq!(state.image_status.get(&1), None);
        assert_eq!(state.load_phase, LoadPhase::Ready);
    }

    #[test]
    fn mark_image_touches_only_its_position() {
        let mut state = loaded_state(4);
        state.mark_image(2, ImageStatus::Failed);

        assert_eq!(state.image_status.get(&2), Some(&ImageStatus::Failed));
        assert_eq!(state.image_status.get(&0), Some(&ImageStatus::Loading));
        assert_eq!(state.image_status.get(&1), Some(&ImageStatus::Loading));
        assert_eq!(state.image_status.get(&3), Some(&ImageStatus::Loading));
    }

    #[test]
    fn mark_image_ignores_out_of_range_positions() {
        let mut state = loaded_state(2);
        state.mark_image(10, ImageStatus::Loaded);
        assert_eq!(state.image_status.get(&10), None);
    }

    #[test]
    fn collapsed_cell_shows_cover_face() {
        let state = loaded_state(1);
        let vm = state.compute_viewmodel(24, 80);

        let cell = &vm.grid_rows[0].cells[0];
        assert!(matches!(cell.face, CellFace::Cover { .. }));
        assert_eq!(cell.authors_line, "A1");
    }

    #[test]
    fn expanded_cell_shows_text_face() {
        let mut state = loaded_state(1);
        state.toggles.toggle(0);
        let vm = state.compute_viewmodel(24, 80);

        match &vm.grid_rows[0].cells[0].face {
            CellFace::Text { title, description } => {
                assert_eq!(title, "Book 0");
                assert_eq!(description, "D");
            }
            CellFace::Cover { .. } => panic!("expected text face"),
        }
    }

    #[test]
    fn rebinding_rereads_toggle_state() {
        let mut state = loaded_state(1);

        let vm = state.compute_viewmodel(24, 80);
        assert!(matches!(vm.grid_rows[0].cells[0].face, CellFace::Cover { .. }));

        state.toggles.toggle(0);
        let vm = state.compute_viewmodel(24, 80);
        assert!(matches!(vm.grid_rows[0].cells[0].face, CellFace::Text { .. }));

        state.toggles.toggle(0);
        let vm = state.compute_viewmodel(24, 80);
        assert!(matches!(vm.grid_rows[0].cells[0].face, CellFace::Cover { .. }));
    }

    #[test]
    fn authors_line_present_on_both_faces() {
        let mut state = loaded_state(2);
        state.toggles.toggle(1);
        let vm = state.compute_viewmodel(24, 80);

        let cells = &vm.grid_rows[0].cells;
        assert_eq!(cells[0].authors_line, "A1");
        assert_eq!(cells[1].authors_line, "A1");
    }

    #[test]
    fn grid_rows_hold_two_columns_with_odd_tail() {
        let state = loaded_state(5);
        let vm = state.compute_viewmodel(40, 80);

        assert_eq!(vm.grid_rows.len(), 3);
        assert_eq!(vm.grid_rows[0].cells.len(), 2);
        assert_eq!(vm.grid_rows[2].cells.len(), 1);
        assert_eq!(vm.grid_rows[2].cells[0].position, 4);
    }

    #[test]
    fn windowing_keeps_selected_row_visible() {
        let mut state = loaded_state(40);
        state.selected_index = 39;
        // 24 rows leaves (24 - 6) / 4 = 4 visible grid rows.
        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.grid_rows.len(), 4);
        assert!(vm
            .grid_rows
            .iter()
            .flat_map(|row| row.cells.iter())
            .any(|cell| cell.position == 39 && cell.is_selected));
    }

    #[test]
    fn loading_phase_yields_empty_state() {
        let state = AppState::new("android".to_string(), Theme::default());
        let vm = state.compute_viewmodel(24, 80);

        assert!(vm.grid_rows.is_empty());
        assert_eq!(vm.empty_state.unwrap().message, "Searching books");
    }

    #[test]
    fn empty_result_yields_no_books_message() {
        let mut state = AppState::new("android".to_string(), Theme::default());
        state.set_books(vec![]);
        let vm = state.compute_viewmodel(24, 80);

        assert_eq!(vm.empty_state.unwrap().message, "No books to display");
    }

    #[test]
    fn header_carries_query_and_count() {
        let state = loaded_state(3);
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.header.title, " Books: \"android\" (3) ");
    }

    #[test]
    fn next_generation_increments() {
        let mut state = AppState::new("android".to_string(), Theme::default());
        assert_eq!(state.next_generation(), 1);
        assert_eq!(state.next_generation(), 2);
        assert_eq!(state.fetch_generation, 2);
    }

    #[test]
    fn truncate_to_respects_width() {
        assert_eq!(truncate_to("short", 10), "short");
        assert_eq!(truncate_to("a longer sentence", 10), "a longe...");
    }
}
