//! Component-local state for the Local page.
//!
//! Everything in this module deliberately lives *outside* the global store.
//! [`LocalPanel`] is recreated from defaults each time the page is entered,
//! demonstrating that component state dies with its component. The theme
//! flag is shared across the page's panels through [`ThemeContext`], an
//! explicit context value handed down by the app: visible beneath that
//! provider, invisible to everything else, and never persisted.

use crate::search::catalog::filter_items;
use crate::store::ThemeMode;

/// Theme flag shared by the Local page's components.
///
/// Owned by the app and passed by reference into the page's rendering, the
/// Rust analog of a context provider scoped to one subtree. Independent of
/// the store's [`crate::store::ThemeState`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeContext {
    /// Active mode for the Local page subtree.
    pub mode: ThemeMode,
}

impl ThemeContext {
    /// Flips the shared flag.
    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
    }
}

/// Per-page counter and search query.
///
/// Filtering is synchronous: every keystroke recomputes the visible subset
/// of the reference list immediately, with no loading state and no timers,
/// the counterpoint to the store page's debounced pipeline.
#[derive(Debug, Clone, Default)]
pub struct LocalPanel {
    /// Page-local counter, reset to zero whenever the page is entered.
    pub counter: i64,

    /// Page-local query text.
    pub query: String,
}

impl LocalPanel {
    /// Items matching the current query, computed on demand.
    #[must_use]
    pub fn filtered_items(&self) -> Vec<String> {
        filter_items(&self.query)
    }
}
