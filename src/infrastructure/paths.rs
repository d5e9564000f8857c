//! Filesystem locations for the snapshot and log files.
//!
//! Uses the platform's conventional data directory (XDG on Linux,
//! `Application Support` on macOS, `AppData` on Windows), falling back to a
//! dot directory in the working directory when no home can be resolved.

use crate::persist::SNAPSHOT_FILE_NAME;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Returns the data directory for statewise storage.
///
/// The directory is not created here; callers create it when they first
/// write into it.
#[must_use]
pub fn data_dir() -> PathBuf {
    ProjectDirs::from("", "", "statewise").map_or_else(
        || PathBuf::from(".statewise"),
        |dirs| dirs.data_dir().to_path_buf(),
    )
}

/// Default location of the durable snapshot file.
#[must_use]
pub fn default_snapshot_path() -> PathBuf {
    data_dir().join(SNAPSHOT_FILE_NAME)
}

/// Location of the trace log file.
///
/// Logs go to a file rather than stderr so raw-mode terminal output stays
/// intact.
#[must_use]
pub fn log_file_path() -> PathBuf {
    data_dir().join("statewise.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_and_log_live_in_the_data_dir() {
        let dir = data_dir();
        assert!(default_snapshot_path().starts_with(&dir));
        assert!(log_file_path().starts_with(&dir));
    }
}
