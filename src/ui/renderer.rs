//! Top-level rendering coordinator.
//!
//! Computes the view model from application state, picks the palette for the
//! active page's theme, and delegates to the component renderers. Output is
//! plain ANSI on stdout; the runtime shim owns raw mode and flushing.

use crate::app::AppState;
use crate::ui::components::render_page;
use crate::ui::helpers::{clear_screen, position_cursor};
use crate::ui::theme::PaletteSet;

/// Renders one frame to stdout.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `palettes` - Light/dark palette pair; the active page's theme selects
/// * `rows` / `cols` - Terminal dimensions in character cells
pub fn render(state: &AppState, palettes: &PaletteSet, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel();
    let palette = palettes.for_mode(state.active_theme());

    clear_screen();
    position_cursor(1, 1);
    render_page(&viewmodel, palette, rows, cols);
}
