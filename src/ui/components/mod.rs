//! Composable UI component renderers.
//!
//! Each component renders one part of the frame at an explicit row and
//! returns the next free row, so [`render_page`] can stack them without a
//! layout engine.
//!
//! ```text
//! [Header: title + store counter readout]
//! [Nav hint]
//! [Border]
//! [Counter panel]
//! [Theme panel]
//! [Search panel: box + status + results]
//! [Note]
//! [Border]
//! [Footer]
//! ```

mod footer;
mod header;
mod panels;
mod search;

use crate::ui::helpers::{position_cursor, truncate_to};
use crate::ui::theme::Palette;
use crate::ui::viewmodel::UIViewModel;

use footer::render_footer;
use header::render_header;
use panels::{render_counter_panel, render_theme_panel};
use search::render_search_panel;

/// Renders a horizontal border line at the given row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Palette::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Palette::reset());
    row + 1
}

/// Renders the full frame for the active page.
///
/// Reserves the last three rows for the note, bottom border, and footer;
/// the search panel receives whatever vertical space remains.
pub fn render_page(vm: &UIViewModel, palette: &Palette, rows: usize, cols: usize) {
    let footer_row = rows.saturating_sub(1).max(1);
    let border_row = footer_row.saturating_sub(1).max(1);
    let note_row = border_row.saturating_sub(1).max(1);

    let mut row = 2;
    row = render_header(row, &vm.header, palette, cols);
    row = render_border(row, &palette.colors.border, cols);
    row += 1;
    row = render_counter_panel(row, &vm.page.counter, palette);
    row += 1;
    row = render_theme_panel(row, &vm.page.theme, palette);
    row += 1;

    let available = note_row.saturating_sub(row + 1);
    render_search_panel(row, &vm.page.search, palette, cols, available);

    position_cursor(note_row, 1);
    print!("{}", Palette::fg(&palette.colors.text_dim));
    print!(" {}", truncate_to(&vm.page.note, cols.saturating_sub(2)));
    print!("{}", Palette::reset());

    render_border(border_row, &palette.colors.border, cols);
    render_footer(footer_row, &vm.footer, palette, cols);
}
