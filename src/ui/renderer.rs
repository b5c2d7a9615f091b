//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components. It handles the two
//! layouts (grid and empty state) and leaves raw mode and screen clearing to
//! the runtime shim.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View model computation**: Transform `AppState` into `UiViewModel`
//! 2. **Component rendering**: Delegate to specialized component renderers

use std::io::Write;

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UiViewModel;

/// Renders the screen to stdout.
///
/// Computes the view model from application state and delegates to the
/// appropriate layout (grid or empty state), then flushes stdout so the
/// frame appears immediately.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols);
    let _ = std::io::stdout().flush();
}

/// Renders a view model with the layout its state calls for.
fn render_viewmodel(vm: &UiViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(empty) = &vm.empty_state {
        components::render_chrome(vm, theme, rows, cols);
        components::render_empty_state(empty, theme, cols);
        return;
    }

    components::render_chrome(vm, theme, rows, cols);
    components::render_grid(&vm.grid_rows, theme, cols);
}
