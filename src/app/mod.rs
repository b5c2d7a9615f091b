//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! terminal runtime (main.rs) and the domain/api/worker layers. It implements
//! the event-driven architecture that powers the interactive grid.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └─────── Worker Responses ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`state`]: Central application state container and view model computation
//! - [`toggle`]: Per-position expanded/collapsed flags for the grid cells
//!
//! # Example
//!
//! ```
//! use bookgrid::app::{handle_event, AppState, Event};
//! use bookgrid::ui::Theme;
//!
//! let mut state = AppState::new("android".to_string(), Theme::default());
//! let (_render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(actions.is_empty());
//! # Ok::<(), bookgrid::domain::BookgridError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod state;
pub mod toggle;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use state::{AppState, ImageStatus, LoadPhase};
pub use toggle::ToggleState;
