//! User interface rendering layer.
//!
//! Declarative rendering pipeline in the usual shape:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: immutable render models
//! - [`renderer`]: top-level render entry point
//! - [`components`]: composable row-positioned renderers
//! - [`helpers`]: cursor and text utilities
//! - [`theme`]: light/dark palettes and ANSI color helpers

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::{Palette, PaletteSet};
pub use viewmodel::UIViewModel;
