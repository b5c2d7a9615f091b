//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module provides utilities for locating the data directory used for
//! log storage and for expanding user-supplied paths.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
