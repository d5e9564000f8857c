//! The persistence bridge: durable mirroring of counter and theme.
//!
//! The bridge connects the global store to a [`SnapshotBackend`] in two
//! one-way directions:
//!
//! - **startup**: [`PersistenceBridge::load_initial_state`] reads the stored
//!   snapshot once and turns it into the store's initial state, falling back
//!   to full defaults when the record is absent, unreadable, or malformed;
//! - **runtime**: [`PersistenceBridge::attach`] registers a store subscriber
//!   that rewrites the snapshot after every committed transition.
//!
//! The bridge only reads store state and writes the durable record. It never
//! dispatches a transition, and a failing write never propagates to the
//! dispatcher; persistence is best-effort by contract.

use crate::persist::backend::SnapshotBackend;
use crate::persist::json::JsonSnapshotFile;
use crate::persist::snapshot::PersistedSnapshot;
use crate::store::{Store, StoreState, SubscriberId};
use std::path::PathBuf;

/// Mirrors `{counter, theme}` to durable storage on every store change.
pub struct PersistenceBridge<B: SnapshotBackend> {
    backend: B,
}

impl PersistenceBridge<JsonSnapshotFile> {
    /// Opens a bridge over the JSON file backend at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot create the snapshot's parent
    /// directory. Callers typically degrade to running without persistence.
    pub fn open(snapshot_path: PathBuf) -> crate::domain::Result<Self> {
        Ok(Self::new(JsonSnapshotFile::new(snapshot_path)?))
    }
}

impl<B: SnapshotBackend + 'static> PersistenceBridge<B> {
    /// Wraps an arbitrary backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Computes the store's initial state from the stored snapshot.
    ///
    /// Absent record, read failure, or malformed content all yield full
    /// default state; there is no partial recovery. A valid snapshot
    /// restores counter and theme; the search slice always starts at
    /// defaults.
    #[must_use]
    pub fn load_initial_state(&self) -> StoreState {
        match self.backend.read() {
            Ok(Some(snapshot)) => {
                tracing::debug!("rehydrating store from snapshot");
                snapshot.into_initial_state()
            }
            Ok(None) => {
                tracing::debug!("no usable snapshot, starting from defaults");
                StoreState::default()
            }
            Err(e) => {
                tracing::debug!(error = %e, "snapshot read failed, starting from defaults");
                StoreState::default()
            }
        }
    }

    /// Registers the bridge as a store subscriber, consuming it.
    ///
    /// The subscriber captures the backend and rewrites the snapshot after
    /// every committed transition. Write failures (quota, permissions) are
    /// logged and swallowed; the triggering dispatch never observes them.
    pub fn attach(self, store: &mut Store) -> SubscriberId {
        let mut backend = self.backend;
        store.subscribe(move |state| {
            let snapshot = PersistedSnapshot::capture(state);
            if let Err(e) = backend.write(&snapshot) {
                tracing::debug!(error = %e, "snapshot write failed, ignoring");
            }
        })
    }
}
