//! Application state container and view model computation.
//!
//! [`AppState`] wires the demo together: it owns the global store (with the
//! persistence bridge attached as a subscriber), the search pipeline, the
//! Local page's component state, and the two interaction mode flags. The
//! event handler mutates it; the renderer reads it through an immutable view
//! model snapshot.
//!
//! Ownership is deliberate: the store is a plain field handed around by
//! reference, never a process global, so every consumer's access is visible
//! in a signature.

use crate::app::local::{LocalPanel, ThemeContext};
use crate::app::modes::{InputFocus, Page};
use crate::search::SearchPipeline;
use crate::store::{Store, StoreState, ThemeMode, Transition};
use crate::ui::viewmodel::{
    CounterPanel, FooterInfo, HeaderInfo, PageViewModel, SearchPanel, ThemePanel, UIViewModel,
};
use std::time::Instant;

/// Central application state.
#[derive(Debug)]
pub struct AppState {
    /// The global store. All store-page panels read from and dispatch to it.
    pub store: Store,

    /// Debounce + simulated-fetch timers for the store page's search.
    pub pipeline: SearchPipeline,

    /// The Local page's component state, recreated on every entry.
    pub local: LocalPanel,

    /// Theme flag shared across the Local page's panels (context, not store).
    pub theme_context: ThemeContext,

    /// Which page is showing.
    pub page: Page,

    /// Where keystrokes go.
    pub focus: InputFocus,
}

impl AppState {
    /// Creates application state around a (possibly rehydrated) store state.
    #[must_use]
    pub fn new(initial: StoreState, start_page: Page) -> Self {
        Self {
            store: Store::new(initial),
            pipeline: SearchPipeline::new(),
            local: LocalPanel::default(),
            theme_context: ThemeContext::default(),
            page: start_page,
            focus: InputFocus::Normal,
        }
    }

    /// Theme governing the active page's rendering.
    ///
    /// The Local page reads the shared context; the Store page reads the
    /// store. Toggling on one page does not affect the other's source.
    #[must_use]
    pub fn active_theme(&self) -> ThemeMode {
        match self.page {
            Page::Local => self.theme_context.mode,
            Page::Store => self.store.state().theme.mode,
        }
    }

    /// Earliest pending timer deadline, for the runtime's poll timeout.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pipeline.next_deadline()
    }

    /// Dispatches a batch of transitions in order.
    pub(crate) fn apply_transitions(&mut self, transitions: Vec<Transition>) {
        for transition in transitions {
            self.store.dispatch(transition);
        }
    }

    /// Computes the renderable view model for the current frame.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        UIViewModel {
            header: self.compute_header(),
            page: match self.page {
                Page::Local => self.compute_local_page(),
                Page::Store => self.compute_store_page(),
            },
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" {} ", self.page.title()),
            nav: "[1] Local State   [2] Global Store".to_string(),
            store_counter: self.store.state().counter.value,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.focus {
            InputFocus::Normal => {
                "1/2: switch page  +/-: counter  0: reset  t: theme  /: search  q: quit".to_string()
            }
            InputFocus::Search => "Type to search  Backspace: delete  ESC: done".to_string(),
        };
        FooterInfo { keybindings }
    }

    fn compute_local_page(&self) -> PageViewModel {
        let results = self.local.filtered_items();
        let empty_hint = if results.is_empty() {
            Some(if self.local.query.is_empty() {
                "Type to search...".to_string()
            } else {
                "No results found".to_string()
            })
        } else {
            None
        };

        PageViewModel {
            counter: CounterPanel {
                heading: "Counter (page-local)".to_string(),
                value: self.local.counter,
            },
            theme: ThemePanel {
                heading: "Theme (shared context)".to_string(),
                mode_label: self.theme_context.mode.label(),
            },
            search: SearchPanel {
                heading: "Search (instant filter)".to_string(),
                query: self.local.query.clone(),
                focused: self.focus == InputFocus::Search,
                loading: false,
                error: None,
                results,
                empty_hint,
            },
            note: "This page's state dies on navigation; switch away and back to see it reset."
                .to_string(),
        }
    }

    fn compute_store_page(&self) -> PageViewModel {
        let state = self.store.state();
        let empty_hint = if state.search.results.is_empty() && !state.search.loading {
            Some(if state.search.query.is_empty() {
                "Type to search...".to_string()
            } else {
                "No results found".to_string()
            })
        } else {
            None
        };

        PageViewModel {
            counter: CounterPanel {
                heading: "Counter (global store)".to_string(),
                value: state.counter.value,
            },
            theme: ThemePanel {
                heading: "Theme (global store)".to_string(),
                mode_label: state.theme.mode.label(),
            },
            search: SearchPanel {
                heading: "Search (debounced simulated fetch)".to_string(),
                query: state.search.query.clone(),
                focused: self.focus == InputFocus::Search,
                loading: state.search.loading,
                error: state.search.error.clone(),
                results: state.search.results.clone(),
                empty_hint,
            },
            note: "Counter and theme live in the store, persist to disk, and survive restarts."
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_theme_tracks_the_page_owner() {
        let mut state = AppState::new(StoreState::default(), Page::Local);

        state.theme_context.toggle();
        assert_eq!(state.active_theme(), ThemeMode::Dark);

        // The store's theme is independent of the context.
        state.page = Page::Store;
        assert_eq!(state.active_theme(), ThemeMode::Light);
    }

    #[test]
    fn store_counter_readout_appears_on_both_pages() {
        let mut state = AppState::new(StoreState::default(), Page::Local);
        state.store.dispatch(Transition::Increment);

        let on_local = state.compute_viewmodel();
        assert_eq!(on_local.header.store_counter, 1);

        state.page = Page::Store;
        let on_store = state.compute_viewmodel();
        assert_eq!(on_store.header.store_counter, 1);
        assert_eq!(on_store.page.counter.value, 1);
    }

    #[test]
    fn loading_suppresses_the_empty_hint() {
        let mut state = AppState::new(StoreState::default(), Page::Store);
        state.store.dispatch(Transition::SetQuery("fig".to_string()));
        state.store.dispatch(Transition::SearchPending);

        let vm = state.compute_viewmodel();
        assert!(vm.page.search.loading);
        assert!(vm.page.search.empty_hint.is_none());
    }

    #[test]
    fn empty_query_hints_instead_of_no_results() {
        let state = AppState::new(StoreState::default(), Page::Store);
        let vm = state.compute_viewmodel();
        assert_eq!(vm.page.search.empty_hint.as_deref(), Some("Type to search..."));
    }
}
