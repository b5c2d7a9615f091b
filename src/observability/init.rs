//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber to format events and write
//! them to a rotating log file. Log output never goes to stdout, which is
//! reserved for the rendered grid.

use super::file_writer::{FileWriter, FileWriterHandle};
use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file-based log output.
///
/// Sets up a tracing subscriber pipeline that:
/// 1. Filters spans based on the configured trace level
/// 2. Formats events without ANSI escapes
/// 3. Writes to a rotating file with backups
///
/// # Parameters
///
/// * `config` - Application configuration containing `trace_level`
///
/// # Trace Level Resolution
///
/// Level is determined by:
/// 1. `RUST_LOG` environment variable (highest priority)
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # File Location
///
/// Events are written to `bookgrid.log` inside the data directory returned by
/// [`crate::infrastructure::paths::get_data_dir`].
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently fails if directory creation fails (observability is optional)
/// - Idempotent: safe to call multiple times (only the first call takes effect)
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::get_data_dir();
    if let Err(_e) = std::fs::create_dir_all(&data_dir) {
        // Silently fail if we can't create the directory
        return;
    }

    let log_file = data_dir.join("bookgrid.log");
    let writer = FileWriterHandle::new(FileWriter::new(log_file));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    let _ = subscriber.try_init();
}
