//! Statewise: a terminal demo contrasting two state-management styles.
//!
//! Statewise renders two pages with identical panels (a counter, a theme
//! toggle, and a filtered search) wired to different state owners:
//!
//! - the **Local page** keeps its counter and query inside the page and a
//!   theme flag in a context value shared across the page's panels, all of
//!   it gone the moment you navigate away;
//! - the **Store page** reads everything from a single global store mutated
//!   only through named transitions, with counter and theme mirrored to a
//!   durable JSON snapshot and search driven by a debounced simulated fetch.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← Event loop, raw mode
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Pages, events
//! │  - Event handling                                   │  ← Focus/navigation
//! │  - Local panel + theme context                      │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Store Layer   │   │ Persist Layer │   │ Search Layer  │
//! │ (store/)      │   │ (persist/)    │   │ (search/)     │
//! │ - Transitions │   │ - Snapshot    │   │ - Debounce    │
//! │ - Reducer     │   │ - JSON file   │   │ - Sim. fetch  │
//! │ - Observers   │   │ - Bridge      │   │ - Catalog     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  UI, Infrastructure, Domain, Observability          │
//! │  - ANSI component renderers (ui/)                   │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/)                            │
//! │  - Tracing setup (observability/)                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Control flow
//!
//! UI events either mutate the Local page's state directly or dispatch
//! transitions into the store; the store recomputes state through the pure
//! reducer and synchronously notifies its subscribers (the persistence
//! bridge among them); the search pipeline's two timers are polled by the
//! shim's cooperative event loop.
//!
//! # Example
//!
//! ```no_run
//! use statewise::{handle_event, initialize, Config, Event};
//! use std::time::Instant;
//!
//! let config = Config::from_env();
//! let mut state = initialize(&config);
//!
//! let (redraw, actions) = handle_event(&mut state, &Event::Increment, Instant::now())?;
//! assert!(redraw);
//! assert!(actions.is_empty());
//! # Ok::<(), statewise::StatewiseError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod persist;
pub mod search;
pub mod store;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputFocus, Page};
pub use domain::{Result, StatewiseError};
pub use persist::PersistenceBridge;
pub use search::SearchPipeline;
pub use store::{Store, StoreState, ThemeMode, Transition};

use std::path::PathBuf;

/// Runtime configuration parsed from the environment.
///
/// All values are optional with sensible defaults; the core carries no
/// configuration surface of its own (timer durations are crate constants).
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Override for the snapshot file location.
    ///
    /// Default: `statewise-snapshot.json` under the platform data directory.
    pub snapshot_path: Option<PathBuf>,

    /// Path to a TOML palette pair overriding the built-in light/dark
    /// palettes. See [`ui::theme`] for the format.
    pub palette_file: Option<String>,

    /// Tracing filter for the log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from `STATEWISE_*` environment variables.
    ///
    /// Unset or empty variables fall back to defaults:
    ///
    /// - `STATEWISE_SNAPSHOT_PATH` → [`Config::snapshot_path`]
    /// - `STATEWISE_PALETTE` → [`Config::palette_file`]
    /// - `STATEWISE_TRACE_LEVEL` → [`Config::trace_level`]
    #[must_use]
    pub fn from_env() -> Self {
        let non_empty = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        Self {
            snapshot_path: non_empty("STATEWISE_SNAPSHOT_PATH").map(PathBuf::from),
            palette_file: non_empty("STATEWISE_PALETTE"),
            trace_level: non_empty("STATEWISE_TRACE_LEVEL"),
        }
    }
}

/// Initializes application state with persistence attached.
///
/// Opens the snapshot backend, rehydrates counter and theme from the stored
/// record (defaults when absent or malformed), and registers the persistence
/// bridge as a store subscriber. If the backend cannot be opened at all the
/// demo runs without persistence rather than failing.
///
/// The process always starts on the Local page.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing statewise");

    let snapshot_path = config
        .snapshot_path
        .clone()
        .unwrap_or_else(infrastructure::default_snapshot_path);

    match PersistenceBridge::open(snapshot_path.clone()) {
        Ok(bridge) => {
            let initial = bridge.load_initial_state();
            tracing::debug!(
                path = ?snapshot_path,
                counter = initial.counter.value,
                theme = initial.theme.mode.label(),
                "store rehydrated"
            );

            let mut state = AppState::new(initial, Page::Local);
            bridge.attach(&mut state.store);
            state
        }
        Err(e) => {
            tracing::debug!(error = %e, "persistence unavailable, running in-memory only");
            AppState::new(StoreState::default(), Page::Local)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_rehydrates_from_a_configured_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            snapshot_path: Some(dir.path().join("snap.json")),
            ..Config::default()
        };

        // First lifetime: mutate the store so the bridge writes a snapshot.
        {
            let mut state = initialize(&config);
            state.store.dispatch(Transition::Increment);
            state.store.dispatch(Transition::ToggleTheme);
        }

        // Second lifetime: the same config rehydrates what was written.
        let state = initialize(&config);
        assert_eq!(state.store.state().counter.value, 1);
        assert_eq!(state.store.state().theme.mode, ThemeMode::Dark);
        assert_eq!(state.page, Page::Local);
    }
}
