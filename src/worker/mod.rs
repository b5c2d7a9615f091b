//! Background tasks for the startup fetch and per-cell image loads.
//!
//! This module owns everything that runs off the foreground loop. There are
//! exactly two kinds of background work:
//!
//! - **The search fetch**: one task, spawned at startup, that performs the
//!   HTTP search, maps the envelope, and reports back. It never repeats.
//! - **Image loads**: one short-lived task per cell with a cover URL,
//!   independent and unordered, each reporting only for its own position.
//!
//! # Late completions
//!
//! Every message a task sends carries the fetch generation it was spawned
//! under. The event handler compares it against the current generation and
//! drops anything stale, so a completion arriving after the owning screen
//! state has moved on can never mutate it. The runtime additionally aborts
//! in-flight tasks on teardown.
//!
//! # Modules
//!
//! - [`messages`]: Response messages delivered to the foreground loop
//! - [`fetch`]: The single startup search task
//! - [`images`]: Per-cell cover loads

pub mod fetch;
pub mod images;
pub mod messages;

pub use fetch::spawn_search;
pub use images::spawn_image_loads;
pub use messages::{ImageRequest, WorkerResponse};
