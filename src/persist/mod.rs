//! Persistence layer: durable snapshot of counter and theme.
//!
//! Mirrors the persistable subset of store state to a JSON file on every
//! committed transition and rehydrates it at startup. Failure anywhere in
//! this layer degrades to defaults; nothing here can crash the store.
//!
//! # Modules
//!
//! - [`snapshot`]: the serialized record and its capture/restore logic
//! - [`backend`]: storage trait abstraction
//! - [`json`]: JSON file backend with atomic writes
//! - [`bridge`]: the store subscriber wiring it all together

pub mod backend;
pub mod bridge;
pub mod json;
pub mod snapshot;

pub use backend::SnapshotBackend;
pub use bridge::PersistenceBridge;
pub use json::JsonSnapshotFile;
pub use snapshot::{PersistedSnapshot, SNAPSHOT_FILE_NAME, SNAPSHOT_VERSION};
