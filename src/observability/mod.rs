//! File-based logging built on the `tracing` ecosystem.
//!
//! Because stdout is the rendering surface, log events cannot share it.
//! This module wires the `tracing` subscriber to a rotating log file so
//! spans and events remain inspectable after a session.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → bookgrid.log
//! ```
//!
//! # Features
//!
//! - **File-Based Output**: Events written to `~/.local/share/bookgrid/bookgrid.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **Plain Text Format**: ANSI escapes disabled, targets included
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! Initialize tracing before entering the event loop:
//!
//! ```rust,no_run
//! use bookgrid::observability::init_tracing;
//! use bookgrid::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("logging initialized");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`file_writer`]: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use init::init_tracing;
