//! Bookgrid: a terminal grid browser for book search results.
//!
//! Bookgrid runs one search against the Google Books API at startup and
//! presents the results as a two-column grid of flippable cells:
//! - Each cell shows either the book's cover face or its text face
//! - Flipping is per-position and survives scrolling
//! - Cover thumbnails are fetched asynchronously, one task per cell
//! - All fetch failures collapse to an empty grid rather than an error screen

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Runtime (main.rs)                         │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ API Layer     │   │ Worker Layer  │
//! │ (ui/)         │   │ (api/)        │   │ (worker/)     │
//! │ - Rendering   │   │ - HTTP client │   │ - Async fetch │
//! │ - Theming     │   │ - Envelope    │   │ - Image loads │
//! │ - Components  │   │ - Mapping     │   │ - Responses   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Book model (domain/book)                         │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber                               │
//! │  - Rotating file log                                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Book, errors)
//! - [`api`]: Search API client, response envelope, and mapping
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`worker`]: Background tasks for the fetch and image loads
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: File-based tracing (internal)
//!
//! # Configuration
//!
//! The application is configured via environment variables:
//!
//! ```text
//! BOOKGRID_QUERY="rust async"        # search query (default: "android")
//! BOOKGRID_MAX_RESULTS="10"          # page size (default: 10)
//! BOOKGRID_THEME="catppuccin-mocha"  # built-in theme name
//! BOOKGRID_THEME_FILE="~/my.toml"    # custom theme file (wins over name)
//! BOOKGRID_TRACE_LEVEL="debug"       # log level (default: "info")
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Startup** (`main.rs`):
//!    - Parse configuration from the environment
//!    - Initialize tracing (optional)
//!    - Create `AppState` with theme
//!    - Spawn the single search task
//!
//! 2. **Fetch Completion**:
//!    - Map the raw envelope into flat `Book` records
//!    - Seed the grid, spawn one image load per cover
//!
//! 3. **UI Rendering**:
//!    - Compute view model from state
//!    - Render components (header, grid, footer)
//!    - Handle user input (j/k/Enter/q)
//!
//! # Examples
//!
//! ## Basic Usage (Library)
//!
//! ```rust
//! use bookgrid::{Config, initialize, handle_event, Event};
//!
//! let config = Config {
//!     query: "rust async".to_string(),
//!     ..Default::default()
//! };
//!
//! let mut state = initialize(&config);
//!
//! let events = vec![Event::KeyDown, Event::ToggleSelected];
//! for event in events {
//!     let (_should_render, actions) = handle_event(&mut state, &event)?;
//!     // Execute actions...
//! }
//! # Ok::<(), bookgrid::BookgridError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Position-Keyed Flip State
//!
//! Which face a cell shows is keyed by grid position, not book identity:
//! - Flip state lives outside the cells in a single map
//! - Cells are stateless views, re-derived from the map on every render
//! - A face never leaks from one bind to the next
//!
//! ## Generation-Tagged Background Work
//!
//! Every background task carries the fetch generation it was spawned under:
//! - Stale completions are dropped at the event handler
//! - A late image load can never paint into a recycled position
//!
//! ## Immutable View Models
//!
//! UI rendering uses computed view models:
//! - Clear separation between state and display
//! - Enables easier testing and validation
//! - Pre-computes truncation and the authors line

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, ImageStatus, LoadPhase};
pub use domain::{Book, BookgridError, Result};
pub use ui::Theme;

/// Application configuration parsed from the environment.
///
/// Every value has a default, so the binary runs with no configuration at
/// all and still shows a populated grid.
///
/// # Example
///
/// ```sh
/// BOOKGRID_QUERY="distributed systems" BOOKGRID_MAX_RESULTS="20" bookgrid
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Search query sent to the books API at startup.
    ///
    /// Default: `"android"`
    pub query: String,

    /// Maximum number of results to request.
    ///
    /// Default: 10
    pub max_results: u32,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Log level for the tracing subscriber.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            query: "android".to_string(),
            max_results: 10,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from `BOOKGRID_*` environment variables.
    ///
    /// Missing or empty variables fall back to defaults; a `max_results`
    /// value that fails to parse falls back to 10.
    ///
    /// # Parsing Rules
    ///
    /// - `BOOKGRID_QUERY`: String (trimmed, empty falls back to `"android"`)
    /// - `BOOKGRID_MAX_RESULTS`: String → `u32` (falls back to 10 on parse error)
    /// - `BOOKGRID_THEME`: String → `Option<String>`
    /// - `BOOKGRID_THEME_FILE`: String → `Option<String>`
    /// - `BOOKGRID_TRACE_LEVEL`: String → `Option<String>`
    #[must_use]
    pub fn from_env() -> Self {
        let get = |name: &str| {
            std::env::var(name)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let query = get("BOOKGRID_QUERY").unwrap_or_else(|| "android".to_string());

        let max_results = get("BOOKGRID_MAX_RESULTS")
            .and_then(|s| s.parse::<u32>().ok())
            .unwrap_or(10);

        Self {
            query,
            max_results,
            theme_name: get("BOOKGRID_THEME"),
            theme_file: get("BOOKGRID_THEME_FILE"),
            trace_level: get("BOOKGRID_TRACE_LEVEL"),
        }
    }
}

/// Initializes the application with configuration.
///
/// Creates a new `AppState` with:
/// - The configured search query
/// - Loaded theme (from file, name, or default)
/// - Empty book list (populated later by the fetch task)
///
/// # Parameters
///
/// * `config` - Application configuration
///
/// # Returns
///
/// An initialized `AppState` ready for event processing. The state starts in
/// the loading phase until the fetch task reports back.
///
/// # Example
///
/// ```rust
/// use bookgrid::{Config, initialize};
///
/// let config = Config {
///     theme_name: Some("catppuccin-latte".to_string()),
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// // State is ready for event processing
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(query = %config.query, "initializing bookgrid");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(config.query.clone(), theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_the_stock_query() {
        let config = Config::default();
        assert_eq!(config.query, "android");
        assert_eq!(config.max_results, 10);
        assert!(config.theme_name.is_none());
        assert!(config.theme_file.is_none());
    }

    #[test]
    fn initialize_starts_in_loading_phase() {
        let state = initialize(&Config::default());
        assert_eq!(state.load_phase, LoadPhase::Loading);
        assert!(state.books.is_empty());
    }

    #[test]
    fn initialize_falls_back_when_theme_is_unknown() {
        let config = Config {
            theme_name: Some("not-a-theme".to_string()),
            ..Default::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, Theme::default().name);
    }
}
