//! Messages sent from background tasks to the foreground loop.
//!
//! Background tasks never touch application state directly; they report
//! completions over an mpsc channel as [`WorkerResponse`] values, which the
//! runtime wraps into events for the handler. Every variant carries the fetch
//! generation it belongs to so stale completions can be recognized and
//! dropped.

use crate::domain::Book;

/// A request to load one cell's cover image.
///
/// Emitted by the event handler (as part of `Action::LoadImages`) once books
/// have arrived, and consumed by the image-load tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    /// Grid position of the cell this cover belongs to.
    pub position: usize,

    /// Secure thumbnail URL to fetch. Never empty; cells without a cover
    /// produce no request.
    pub url: String,
}

/// Responses sent from background tasks back to the foreground loop.
///
/// Each variant corresponds to the completion of one background operation,
/// successful or not. The `generation` field identifies the fetch the work
/// was spawned under; responses whose generation no longer matches the
/// application state are ignored by the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerResponse {
    /// The startup search completed and mapped successfully.
    SearchCompleted {
        /// Generation of the fetch that produced these books.
        generation: u64,

        /// Mapped display records in response order. May be empty.
        books: Vec<Book>,
    },

    /// The startup search failed (transport, status, or parse).
    ///
    /// The handler collapses this to an empty book list; the message is kept
    /// for the log line only.
    SearchFailed {
        /// Generation of the failed fetch.
        generation: u64,

        /// Human-readable failure description.
        error: String,
    },

    /// One cell's cover image finished downloading.
    ImageLoaded {
        /// Generation of the fetch whose books are on screen.
        generation: u64,

        /// Grid position of the cell the cover belongs to.
        position: usize,

        /// Downloaded size in bytes.
        bytes: usize,
    },

    /// One cell's cover image failed to download.
    ///
    /// Non-fatal and never surfaced to the user; the cell keeps rendering
    /// its other fields.
    ImageFailed {
        /// Generation of the fetch whose books are on screen.
        generation: u64,

        /// Grid position of the cell the cover belongs to.
        position: usize,

        /// Human-readable failure description.
        error: String,
    },
}
