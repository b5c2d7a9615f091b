//! Per-cell cover image loads.
//!
//! Each cell with a cover URL gets its own task issuing one GET. Loads are
//! independent and unordered; completions may arrive in any order or not at
//! all, and each one updates only its own cell via the response channel.
//! Failures are logged and reported as non-fatal [`WorkerResponse::ImageFailed`]
//! messages; nothing is retried and the foreground loop is never blocked.

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::BookgridError;
use crate::worker::messages::{ImageRequest, WorkerResponse};

/// Spawns one image-load task per request.
///
/// # Parameters
///
/// * `http` - Shared HTTP client for the downloads
/// * `requests` - One entry per cell with a non-empty cover URL
/// * `generation` - Fetch generation the on-screen books belong to
/// * `tx` - Response channel to the foreground loop
///
/// # Returns
///
/// The spawned handles, so the runtime can abort in-flight loads on teardown.
pub fn spawn_image_loads(
    http: reqwest::Client,
    requests: Vec<ImageRequest>,
    generation: u64,
    tx: UnboundedSender<WorkerResponse>,
) -> Vec<JoinHandle<()>> {
    requests
        .into_iter()
        .map(|request| {
            let http = http.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let response = load_image(&http, &request, generation).await;
                let _ = tx.send(response);
            })
        })
        .collect()
}

/// Downloads one cover and builds the completion message.
async fn load_image(
    http: &reqwest::Client,
    request: &ImageRequest,
    generation: u64,
) -> WorkerResponse {
    let outcome = async {
        let response = http.get(&request.url).send().await?;
        let response = response.error_for_status()?;
        response.bytes().await
    }
    .await;

    match outcome {
        Ok(bytes) => {
            debug!(
                position = request.position,
                bytes = bytes.len(),
                "cover image loaded"
            );
            WorkerResponse::ImageLoaded {
                generation,
                position: request.position,
                bytes: bytes.len(),
            }
        }
        Err(e) => {
            let error = BookgridError::ImageLoad {
                position: request.position,
                reason: e.to_string(),
            };
            warn!(url = %request.url, error = %error, "cover image load failed");
            WorkerResponse::ImageFailed {
                generation,
                position: request.position,
                error: error.to_string(),
            }
        }
    }
}
