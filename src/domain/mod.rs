//! Domain layer: error types shared by every other layer.
//!
//! The demo's domain is deliberately small. State value types live next to
//! the store that owns them ([`crate::store`]); this module only hosts the
//! crate-wide error type and result alias.

pub mod error;

pub use error::{Result, StatewiseError};
