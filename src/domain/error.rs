//! Error types for statewise.
//!
//! This module defines the centralized error type [`StatewiseError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for statewise operations.
///
/// This enum consolidates the error conditions that can occur while running
/// the demo, from snapshot persistence to terminal I/O. Variants wrapping
/// external errors use `#[from]` for automatic conversion with `?`.
///
/// Note that the core state machinery deliberately has no error surface:
/// dispatching a transition always succeeds, and persistence failures are
/// recovered locally (see [`crate::persist`]). These variants cover the outer
/// layers only.
#[derive(Debug, Error)]
pub enum StatewiseError {
    /// Snapshot serialization or storage failed.
    ///
    /// Produced by the snapshot backend when encoding or writing the durable
    /// record fails. The persistence bridge swallows these; they only reach
    /// callers that use the backend directly.
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Filesystem or terminal I/O operation failed.
    ///
    /// Wraps errors from standard library and crossterm I/O operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Palette parsing or loading failed.
    ///
    /// Occurs when a custom palette override file cannot be read or parsed.
    #[error("Palette error: {0}")]
    Palette(String),
}

/// A specialized `Result` type for statewise operations.
///
/// Type alias for `std::result::Result<T, StatewiseError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, StatewiseError>;
