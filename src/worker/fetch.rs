//! The single startup search task.
//!
//! Spawns one tokio task that performs the HTTP search, maps the envelope to
//! display records, and hands the result to the foreground loop over the
//! response channel. The task runs once per screen; there is no refresh, no
//! retry, and no concurrent fetch.
//!
//! The returned `JoinHandle` lets the runtime abort the task if the screen is
//! torn down before completion; the generation tag on the response covers the
//! window where the task finishes between teardown and abort.

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::api::{mapper, BooksClient};
use crate::worker::messages::WorkerResponse;

/// Spawns the background search fetch.
///
/// On success the raw envelope is mapped immediately and a
/// [`WorkerResponse::SearchCompleted`] is sent; on any failure a
/// [`WorkerResponse::SearchFailed`] is sent instead. A closed channel (the
/// foreground loop is gone) is silently ignored.
///
/// # Parameters
///
/// * `client` - Search client (cheap to clone, moved into the task)
/// * `query` - Search query text
/// * `max_results` - Result-count limit
/// * `generation` - Fetch generation to tag the response with
/// * `tx` - Response channel to the foreground loop
pub fn spawn_search(
    client: BooksClient,
    query: String,
    max_results: u32,
    generation: u64,
    tx: UnboundedSender<WorkerResponse>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let response = match client.search(&query, max_results).await {
            Ok(raw) => {
                let books = mapper::to_books(Ok(raw));
                info!(
                    generation = generation,
                    book_count = books.len(),
                    "search fetch completed"
                );
                WorkerResponse::SearchCompleted { generation, books }
            }
            Err(e) => {
                warn!(generation = generation, error = %e, "search fetch failed");
                WorkerResponse::SearchFailed {
                    generation,
                    error: e.to_string(),
                }
            }
        };

        let _ = tx.send(response);
    })
}
