//! Simulated asynchronous search.
//!
//! - [`catalog`]: the fixed reference list and its substring filter
//! - [`pipeline`]: debounce + simulated latency, producing store transitions

pub mod catalog;
pub mod pipeline;

pub use catalog::{filter_items, REFERENCE_ITEMS};
pub use pipeline::{SearchPipeline, DEBOUNCE_WINDOW, FETCH_LATENCY};
