//! Infrastructure layer: platform paths.

pub mod paths;

pub use paths::{data_dir, default_snapshot_path, log_file_path};
