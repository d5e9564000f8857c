//! JSON file snapshot backend.
//!
//! Stores the snapshot as a human-readable JSON file, written atomically
//! (write-to-temp + rename) so a crash mid-write never leaves a torn record
//! behind. Reads are lenient: unparseable content is treated as absent.

use crate::domain::error::{Result, StatewiseError};
use crate::persist::backend::SnapshotBackend;
use crate::persist::snapshot::PersistedSnapshot;
use std::path::PathBuf;

/// Snapshot backend writing a single JSON file.
pub struct JsonSnapshotFile {
    /// Path of the snapshot file on disk.
    file_path: PathBuf,
}

impl JsonSnapshotFile {
    /// Creates a backend for the given file path.
    ///
    /// Parent directories are created eagerly so later writes only have to
    /// deal with the file itself.
    ///
    /// # Errors
    ///
    /// Returns an error if parent directory creation fails.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON snapshot backend");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        Ok(Self { file_path })
    }
}

impl SnapshotBackend for JsonSnapshotFile {
    fn write(&mut self, snapshot: &PersistedSnapshot) -> Result<()> {
        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| StatewiseError::Snapshot(format!("failed to serialize snapshot: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing snapshot to temporary file");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        tracing::debug!(path = ?self.file_path, "snapshot saved");
        Ok(())
    }

    fn read(&self) -> Result<Option<PersistedSnapshot>> {
        if !self.file_path.exists() {
            tracing::debug!(path = ?self.file_path, "no snapshot file present");
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.file_path)?;

        match serde_json::from_str::<PersistedSnapshot>(&contents) {
            Ok(snapshot) if snapshot.is_current_version() => Ok(Some(snapshot)),
            Ok(snapshot) => {
                tracing::debug!(?snapshot, "snapshot version mismatch, treating as absent");
                Ok(None)
            }
            Err(e) => {
                tracing::debug!(error = %e, "snapshot failed to parse, treating as absent");
                Ok(None)
            }
        }
    }
}
