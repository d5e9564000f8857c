//! Tracing initialization and subscriber setup.
//!
//! Configures the `tracing` subscriber to write structured logs to a file
//! under the data directory. File output keeps the raw-mode terminal frame
//! intact; set `STATEWISE_TRACE_LEVEL` (or `Config::trace_level`) to enable
//! more verbose spans.

use crate::infrastructure::paths;
use crate::Config;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file output.
///
/// # Trace level resolution
///
/// 1. `config.trace_level` if set
/// 2. Default: `"info"`
///
/// # Initialization behavior
///
/// - Creates the data directory if it does not exist
/// - Silently does nothing if the directory or log file cannot be created
///   (observability is optional)
/// - Idempotent: only the first call installs a subscriber
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths::log_file_path())
    else {
        return;
    };

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_target(true);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(file_layer);

    let _ = subscriber.try_init();
}
