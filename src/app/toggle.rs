//! Per-position expanded/collapsed flags for the grid cells.
//!
//! Each cell shows one of two faces: the cover image (collapsed, the default)
//! or the title and description (expanded). `ToggleState` tracks which face
//! is up, keyed by grid position.
//!
//! # Position keying
//!
//! State is keyed by position, not by book identity. That is a deliberate
//! contract: the book list is fetched once and is immutable for the lifetime
//! of the screen, so positions are stable by construction. If the list could
//! ever be reordered or refreshed in place, this store would have to be
//! re-keyed by a stable book identifier instead.
//!
//! # Concurrency
//!
//! The store is touched only from the foreground loop (key handling and view
//! model computation), so it carries no internal locking.

use std::collections::HashMap;

/// Mapping from grid position to its expanded flag.
///
/// Entries exist only for positions that have been toggled at least once;
/// lookups for untouched positions yield the default `false` (cover face
/// visible). The store grows with distinct toggled positions, up to the list
/// size, and never shrinks; it is dropped with the screen.
#[derive(Debug, Clone, Default)]
pub struct ToggleState {
    expanded: HashMap<usize, bool>,
}

impl ToggleState {
    /// Creates an empty store with every position collapsed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the cell at `position` shows its text face.
    ///
    /// Positions never toggled read `false` without creating an entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookgrid::app::ToggleState;
    ///
    /// let toggles = ToggleState::new();
    /// assert!(!toggles.is_expanded(7));
    /// ```
    #[must_use]
    pub fn is_expanded(&self, position: usize) -> bool {
        self.expanded.get(&position).copied().unwrap_or(false)
    }

    /// Flips the flag for `position`, creating the entry from `false` if it
    /// did not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookgrid::app::ToggleState;
    ///
    /// let mut toggles = ToggleState::new();
    /// toggles.toggle(0);
    /// assert!(toggles.is_expanded(0));
    /// toggles.toggle(0);
    /// assert!(!toggles.is_expanded(0));
    /// ```
    pub fn toggle(&mut self, position: usize) {
        let entry = self.expanded.entry(position).or_insert(false);
        *entry = !*entry;
    }

    /// Number of positions that have been toggled at least once.
    #[must_use]
    pub fn touched(&self) -> usize {
        self.expanded.len()
    }
}
