//! Header component renderer.
//!
//! Two lines: the page title with the always-visible store counter readout,
//! and the navigation hint. The counter readout exists to make the demo's
//! point: the store is readable from any page, including the one that does
//! not use it.

use crate::ui::helpers::{position_cursor, truncate_to};
use crate::ui::theme::Palette;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header at the given row, returning the next free row.
pub fn render_header(row: usize, header: &HeaderInfo, palette: &Palette, cols: usize) -> usize {
    let readout = format!("store counter (persists): {}", header.store_counter);
    let title = truncate_to(&header.title, cols.saturating_sub(readout.len() + 2));
    let gap = cols.saturating_sub(title.chars().count() + readout.len() + 1);

    position_cursor(row, 1);
    print!("{}{}", Palette::bold(), Palette::fg(&palette.colors.header_fg));
    print!("{title}");
    print!("{}", " ".repeat(gap));
    print!("{}", Palette::fg(&palette.colors.accent));
    print!("{readout} ");
    print!("{}", Palette::reset());

    position_cursor(row + 1, 1);
    print!("{}", Palette::fg(&palette.colors.text_dim));
    print!(" {}", truncate_to(&header.nav, cols.saturating_sub(2)));
    print!("{}", Palette::reset());

    row + 2
}
