//! Actions representing side effects to be executed by the terminal runtime.
//!
//! This module defines the [`Action`] type, the imperative commands produced
//! by the event handler after processing user input or worker responses.
//! Actions bridge pure state transformations and effectful operations like
//! shutting down the terminal or spawning background downloads.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. The runtime shim
//! executes them in sequence.

use crate::worker::messages::ImageRequest;

/// Commands representing side effects to be executed by the terminal runtime.
///
/// Actions are produced by the event handler and executed by the runtime
/// shim. They represent the boundary between pure state transformations and
/// effectful operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Tears down the screen and exits the application.
    ///
    /// Sent when the user explicitly requests to quit (e.g., pressing 'q').
    /// The runtime restores the terminal and aborts in-flight tasks.
    Quit,

    /// Starts background downloads for the given cover images.
    ///
    /// Emitted once, when the search results arrive. One request per cell
    /// with a non-empty cover URL; each completion updates only its own cell.
    LoadImages {
        /// Cover downloads to start.
        requests: Vec<ImageRequest>,
    },
}
