//! The durable snapshot record.
//!
//! A [`PersistedSnapshot`] is the serialized subset of store state written to
//! durable storage: exactly the counter and theme slices, plus container
//! metadata (format version, write timestamp). The search slice is ephemeral
//! by contract and cannot appear here: [`crate::store::SearchState`] does
//! not implement `Serialize`, so including it would not compile.

use crate::store::{CounterState, SearchState, StoreState, ThemeState};
use serde::{Deserialize, Serialize};

/// Fixed file name acting as the durable key-value key.
pub const SNAPSHOT_FILE_NAME: &str = "statewise-snapshot.json";

/// Current snapshot format version.
///
/// Snapshots with any other version are treated as absent on read; there is
/// no migration path, defaults win.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Durable serialized record of `{counter, theme}`.
///
/// # File format
///
/// ```json
/// {
///   "version": 1,
///   "counter": { "value": 3 },
///   "theme": { "mode": "dark" },
///   "saved_at": 1754400000
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSnapshot {
    /// Snapshot format version for forward compatibility.
    version: u32,

    /// Counter slice at capture time.
    counter: CounterState,

    /// Theme slice at capture time.
    theme: ThemeState,

    /// Unix timestamp of the write, for debugging stale snapshots.
    saved_at: i64,
}

impl PersistedSnapshot {
    /// Captures the persistable subset of the given store state.
    #[must_use]
    pub fn capture(state: &StoreState) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            counter: state.counter,
            theme: state.theme,
            saved_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Whether this snapshot's format version is the one we write.
    #[must_use]
    pub const fn is_current_version(&self) -> bool {
        self.version == SNAPSHOT_VERSION
    }

    /// Rebuilds initial store state from the snapshot.
    ///
    /// Counter and theme are restored; the search slice always starts at
    /// defaults regardless of what was stored.
    #[must_use]
    pub fn into_initial_state(self) -> StoreState {
        StoreState {
            counter: self.counter,
            theme: self.theme,
            search: SearchState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ThemeMode;

    #[test]
    fn round_trip_preserves_counter_and_theme() {
        let mut state = StoreState::default();
        state.counter.value = -7;
        state.theme.mode = ThemeMode::Dark;

        let snapshot = PersistedSnapshot::capture(&state);
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: PersistedSnapshot = serde_json::from_str(&json).unwrap();

        let restored = back.into_initial_state();
        assert_eq!(restored.counter.value, -7);
        assert_eq!(restored.theme.mode, ThemeMode::Dark);
        assert_eq!(restored.search, SearchState::default());
    }

    #[test]
    fn search_slice_never_reaches_the_serialized_form() {
        let mut state = StoreState::default();
        state.search.query = "elderberry".to_string();
        state.search.results = vec!["Elderberry".to_string()];
        state.search.loading = true;

        let json = serde_json::to_string(&PersistedSnapshot::capture(&state)).unwrap();
        assert!(!json.contains("query"));
        assert!(!json.contains("results"));
        assert!(!json.contains("lderberry"));
        assert!(!json.contains("loading"));
    }

    #[test]
    fn rehydration_resets_search_to_defaults() {
        let mut state = StoreState::default();
        state.search.query = "fig".to_string();
        state.counter.value = 4;

        let restored = PersistedSnapshot::capture(&state).into_initial_state();
        assert_eq!(restored.counter.value, 4);
        assert!(restored.search.query.is_empty());
    }
}
