//! Snapshot storage abstraction.
//!
//! This module defines the [`SnapshotBackend`] trait that abstracts over the
//! durable key-value medium holding the snapshot. The production backend is
//! a JSON file ([`crate::persist::JsonSnapshotFile`]); tests substitute
//! in-memory or failing backends to exercise the bridge's recovery paths.

use crate::domain::error::Result;
use crate::persist::snapshot::PersistedSnapshot;

/// Abstraction over the durable medium for the persisted snapshot.
///
/// The store is a single fixed key: `write` replaces the record wholesale
/// (last writer wins), `read` fetches it if present. Implementations are not
/// required to be thread-safe; the demo has a single-threaded writer.
pub trait SnapshotBackend {
    /// Replaces the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the underlying write fails. Callers
    /// at the bridge layer swallow these by contract.
    fn write(&mut self, snapshot: &PersistedSnapshot) -> Result<()>;

    /// Reads the stored snapshot, if any.
    ///
    /// Content that exists but does not parse as a current-version snapshot
    /// is reported as `Ok(None)`; callers cannot distinguish a malformed
    /// record from an absent one.
    ///
    /// # Errors
    ///
    /// Returns an error only for I/O failures on an existing record.
    fn read(&self) -> Result<Option<PersistedSnapshot>>;
}
