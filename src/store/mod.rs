//! Global store: authoritative state, transitions, reducer, observers.
//!
//! This module implements the demo's centerpiece: a single state container
//! mutated only through a closed set of named transitions, with synchronous
//! observer notification after every commit.
//!
//! ```text
//! dispatch(Transition) ──▶ reduce(old, t) ──▶ new state ──▶ subscribers
//! ```
//!
//! # Modules
//!
//! - [`state`]: value types (`CounterState`, `ThemeState`, `SearchState`)
//! - [`transition`]: the closed [`Transition`] set
//! - [`reducer`]: pure transition application
//! - [`store`]: the container with its observer list

pub mod reducer;
pub mod state;
pub mod store;
pub mod transition;

pub use reducer::reduce;
pub use state::{CounterState, SearchState, StoreState, ThemeMode, ThemeState};
pub use store::{Store, SubscriberId};
pub use transition::Transition;
