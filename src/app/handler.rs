//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and worker responses, translating them into state changes and action
//! sequences. It is the primary control flow coordinator for the screen.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the terminal runtime or background tasks
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Event types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Toggling**: `ToggleSelected` flips the selected cell's face
//! - **Lifecycle**: `Quit`
//! - **Worker**: `WorkerResponse` with fetch and image completions
//!
//! # Stale responses
//!
//! Every worker response carries the fetch generation it was spawned under.
//! Responses whose generation does not match the current one are dropped
//! here, so a completion racing a teardown or a superseded fetch can never
//! mutate state it no longer owns.

use crate::app::state::ImageStatus;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::worker::messages::{ImageRequest, WorkerResponse};

/// Events triggered by user input or background task completions.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves selection to the next cell (wraps to the first).
    KeyDown,
    /// Moves selection to the previous cell (wraps to the last).
    KeyUp,
    /// Flips the selected cell between its cover and text faces.
    ToggleSelected,
    /// Tears down the screen and exits.
    Quit,
    /// Wraps a response from a background task.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions.
///
/// This is the primary event handler coordinating all state transitions and
/// side effects. It pattern-matches on event types, calls state mutation
/// methods, and collects actions to be executed by the terminal runtime.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// A tuple of (`should_render`, actions). `should_render` is `true` when the
/// mutation changed something visible; the action list may be empty.
///
/// # Errors
///
/// Currently infallible in practice; the `Result` keeps the signature open
/// for state mutations that can fail.
///
/// # Example
///
/// ```
/// use bookgrid::app::{handle_event, AppState, Event};
/// use bookgrid::ui::Theme;
///
/// let mut state = AppState::new("android".to_string(), Theme::default());
/// let (should_render, actions) = handle_event(&mut state, &Event::Quit)?;
/// assert!(!should_render);
/// assert_eq!(actions.len(), 1);
/// # Ok::<(), bookgrid::domain::BookgridError>(())
/// ```
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::ToggleSelected => {
            let Some(position) = state.selected_position() else {
                tracing::debug!("no cell to toggle");
                return Ok((false, vec![]));
            };

            state.toggles.toggle(position);
            tracing::debug!(
                position = position,
                expanded = state.toggles.is_expanded(position),
                "cell toggled"
            );
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
        Event::WorkerResponse(response) => handle_worker_response(state, response),
    }
}

/// Applies a background task completion to state.
fn handle_worker_response(
    state: &mut AppState,
    response: &WorkerResponse,
) -> Result<(bool, Vec<Action>)> {
    if response_generation(response) != state.fetch_generation {
        tracing::debug!(
            response = ?response,
            current_generation = state.fetch_generation,
            "dropping stale worker response"
        );
        return Ok((false, vec![]));
    }

    match response {
        WorkerResponse::SearchCompleted { books, .. } => {
            tracing::debug!(book_count = books.len(), "search results installed");
            state.set_books(books.clone());

            let requests: Vec<ImageRequest> = state
                .books
                .iter()
                .enumerate()
                .filter(|(_, book)| book.has_cover())
                .map(|(position, book)| ImageRequest {
                    position,
                    url: book.image_url.clone(),
                })
                .collect();

            let actions = if requests.is_empty() {
                vec![]
            } else {
                vec![Action::LoadImages { requests }]
            };
            Ok((true, actions))
        }
        WorkerResponse::SearchFailed { error, .. } => {
            // Network, status, and parse failures all collapse to the same
            // empty grid; the error text goes to the log only.
            tracing::debug!(error = %error, "search failed, showing empty result");
            state.set_books(vec![]);
            Ok((true, vec![]))
        }
        WorkerResponse::ImageLoaded { position, bytes, .. } => {
            tracing::debug!(position = position, bytes = bytes, "cover marked loaded");
            state.mark_image(*position, ImageStatus::Loaded);
            Ok((true, vec![]))
        }
        WorkerResponse::ImageFailed { position, error, .. } => {
            tracing::debug!(position = position, error = %error, "cover marked failed");
            state.mark_image(*position, ImageStatus::Failed);
            Ok((true, vec![]))
        }
    }
}

/// Extracts the generation tag from a worker response.
fn response_generation(response: &WorkerResponse) -> u64 {
    match response {
        WorkerResponse::SearchCompleted { generation, .. }
        | WorkerResponse::SearchFailed { generation, .. }
        | WorkerResponse::ImageLoaded { generation, .. }
        | WorkerResponse::ImageFailed { generation, .. } => *generation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{mapper, raw::RawSearchResponse};
    use crate::ui::theme::Theme;
    use crate::ui::viewmodel::CellFace;

    fn state_with_generation() -> AppState {
        let mut state = AppState::new("android".to_string(), Theme::default());
        state.next_generation();
        state
    }

    fn completed(generation: u64, json: &str) -> Event {
        let raw: RawSearchResponse = serde_json::from_str(json).unwrap();
        Event::WorkerResponse(WorkerResponse::SearchCompleted {
            generation,
            books: mapper::to_books(Ok(raw)),
        })
    }

    #[test]
    fn search_completed_installs_books_and_requests_covers() {
        let mut state = state_with_generation();
        let event = completed(
            1,
            r#"{"items":[{"volumeInfo":{"title":"T","imageLinks":{"thumbnail":"http://img/1.png"}}},{"volumeInfo":{"title":"U"}}]}"#,
        );

        let (should_render, actions) = handle_event(&mut state, &event).unwrap();

        assert!(should_render);
        assert_eq!(state.books.len(), 2);
        assert_eq!(
            actions,
            vec![Action::LoadImages {
                requests: vec![ImageRequest {
                    position: 0,
                    url: "https://img/1.png".to_string(),
                }],
            }]
        );
    }

    #[test]
    fn search_completed_without_covers_emits_no_actions() {
        let mut state = state_with_generation();
        let event = completed(1, r#"{"items":[{"volumeInfo":{"title":"T"}}]}"#);

        let (_, actions) = handle_event(&mut state, &event).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn stale_generation_is_dropped() {
        let mut state = state_with_generation();
        state.next_generation(); // now at 2; a response tagged 1 is stale

        let event = completed(1, r#"{"items":[{"volumeInfo":{"title":"T"}}]}"#);
        let (should_render, actions) = handle_event(&mut state, &event).unwrap();

        assert!(!should_render);
        assert!(actions.is_empty());
        assert!(state.books.is_empty());
    }

    #[test]
    fn search_failure_collapses_to_empty_list() {
        let mut state = state_with_generation();
        let event = Event::WorkerResponse(WorkerResponse::SearchFailed {
            generation: 1,
            error: "Unexpected HTTP status: 404".to_string(),
        });

        let (should_render, actions) = handle_event(&mut state, &event).unwrap();

        assert!(should_render);
        assert!(actions.is_empty());
        assert!(state.books.is_empty());
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.empty_state.unwrap().message, "No books to display");
    }

    #[test]
    fn toggle_selected_flips_only_that_cell() {
        let mut state = state_with_generation();
        let event = completed(
            1,
            r#"{"items":[{"volumeInfo":{"title":"T"}},{"volumeInfo":{"title":"U"}}]}"#,
        );
        handle_event(&mut state, &event).unwrap();

        let (should_render, _) = handle_event(&mut state, &Event::ToggleSelected).unwrap();

        assert!(should_render);
        assert!(state.toggles.is_expanded(0));
        assert!(!state.toggles.is_expanded(1));
    }

    #[test]
    fn toggle_with_no_books_is_ignored() {
        let mut state = state_with_generation();
        let (should_render, actions) = handle_event(&mut state, &Event::ToggleSelected).unwrap();

        assert!(!should_render);
        assert!(actions.is_empty());
    }

    #[test]
    fn image_completions_update_only_their_position() {
        let mut state = state_with_generation();
        let event = completed(
            1,
            r#"{"items":[{"volumeInfo":{"title":"T","imageLinks":{"thumbnail":"http://a/1.png"}}},{"volumeInfo":{"title":"U","imageLinks":{"thumbnail":"http://a/2.png"}}}]}"#,
        );
        handle_event(&mut state, &event).unwrap();

        let loaded = Event::WorkerResponse(WorkerResponse::ImageLoaded {
            generation: 1,
            position: 1,
            bytes: 512,
        });
        handle_event(&mut state, &loaded).unwrap();

        assert_eq!(state.image_status.get(&0), Some(&ImageStatus::Loading));
        assert_eq!(state.image_status.get(&1), Some(&ImageStatus::Loaded));
    }

    #[test]
    fn image_failure_is_nonfatal_for_the_cell() {
        let mut state = state_with_generation();
        let event = completed(
            1,
            r#"{"items":[{"volumeInfo":{"title":"T","imageLinks":{"thumbnail":"http://a/1.png"}}}]}"#,
        );
        handle_event(&mut state, &event).unwrap();

        let failed = Event::WorkerResponse(WorkerResponse::ImageFailed {
            generation: 1,
            position: 0,
            error: "timed out".to_string(),
        });
        let (should_render, _) = handle_event(&mut state, &failed).unwrap();
        assert!(should_render);

        // The cell still renders; expanding it shows the text fields.
        handle_event(&mut state, &Event::ToggleSelected).unwrap();
        let vm = state.compute_viewmodel(24, 80);
        match &vm.grid_rows[0].cells[0].face {
            CellFace::Text { title, .. } => assert_eq!(title, "T"),
            CellFace::Cover { .. } => panic!("expected text face"),
        }
    }

    #[test]
    fn quit_emits_quit_action() {
        let mut state = state_with_generation();
        let (should_render, actions) = handle_event(&mut state, &Event::Quit).unwrap();

        assert!(!should_render);
        assert_eq!(actions, vec![Action::Quit]);
    }

    /// End-to-end scenario from one wire envelope to the toggled cell.
    #[test]
    fn single_item_envelope_renders_and_toggles() {
        let mut state = state_with_generation();
        let event = completed(
            1,
            r#"{"items":[{"volumeInfo":{"title":"T","authors":["A1"],"description":"D","imageLinks":{"thumbnail":"http://img/1.png"}}}]}"#,
        );
        handle_event(&mut state, &event).unwrap();

        assert_eq!(state.books[0].title, "T");
        assert_eq!(state.books[0].authors, vec!["A1".to_string()]);
        assert_eq!(state.books[0].description, "D");
        assert_eq!(state.books[0].image_url, "https://img/1.png");

        // Initially the cover face is up, with the secured URL.
        let vm = state.compute_viewmodel(24, 80);
        match &vm.grid_rows[0].cells[0].face {
            CellFace::Cover { url, .. } => assert_eq!(url, "https://img/1.png"),
            CellFace::Text { .. } => panic!("expected cover face"),
        }

        // One toggle flips to title and description and hides the cover.
        handle_event(&mut state, &Event::ToggleSelected).unwrap();
        let vm = state.compute_viewmodel(24, 80);
        match &vm.grid_rows[0].cells[0].face {
            CellFace::Text { title, description } => {
                assert_eq!(title, "T");
                assert_eq!(description, "D");
            }
            CellFace::Cover { .. } => panic!("expected text face"),
        }
        assert_eq!(vm.grid_rows[0].cells[0].authors_line, "A1");
    }
}
