//! Search panel renderer.
//!
//! Renders the heading, a bordered query box (highlighted while focused),
//! the request status line, and the result list. The same renderer serves
//! both pages; the view model already decided what to show.

use crate::ui::helpers::{position_cursor, truncate_to};
use crate::ui::theme::Palette;
use crate::ui::viewmodel::SearchPanel;

/// Horizontal margin around the query box.
const SEARCH_BOX_MARGIN: usize = 3;

/// Renders the search panel starting at `row`, using at most `available`
/// rows, and returns the next free row.
pub fn render_search_panel(
    row: usize,
    panel: &SearchPanel,
    palette: &Palette,
    cols: usize,
    available: usize,
) -> usize {
    position_cursor(row, 1);
    print!("{}", Palette::fg(&palette.colors.accent));
    print!(" {}", panel.heading);
    print!("{}", Palette::reset());

    let mut current = render_query_box(row + 1, panel, palette, cols);
    let end = row + available;

    if let Some(status_rows) = render_status(current, panel, palette, cols, end) {
        current = status_rows;
    }

    for item in &panel.results {
        if current >= end {
            break;
        }
        position_cursor(current, 1);
        print!("{}", Palette::fg(&palette.colors.text_normal));
        print!("   - {}", truncate_to(item, cols.saturating_sub(6)));
        print!("{}", Palette::reset());
        current += 1;
    }

    current
}

/// Renders the 3-line bordered query box, returning the next free row.
fn render_query_box(row: usize, panel: &SearchPanel, palette: &Palette, cols: usize) -> usize {
    let border_color = if panel.focused {
        &palette.colors.search_border
    } else {
        &palette.colors.border
    };

    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Palette::fg(border_color));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Palette::reset());

    let cursor = if panel.focused { "_" } else { "" };
    let text = truncate_to(
        &format!(" Search: {}{}", panel.query, cursor),
        inner_width,
    );
    let padding = inner_width.saturating_sub(text.chars().count());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Palette::fg(border_color));
    print!("│");
    print!("{}", Palette::fg(&palette.colors.text_normal));
    print!("{text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Palette::fg(border_color));
    print!("│");
    print!("{}", Palette::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Palette::fg(border_color));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Palette::reset());

    row + 3
}

/// Renders loading / error / empty-hint lines, if any apply.
///
/// Returns the next free row, or `None` when no status was drawn.
fn render_status(
    row: usize,
    panel: &SearchPanel,
    palette: &Palette,
    cols: usize,
    end: usize,
) -> Option<usize> {
    let mut current = row;

    if panel.loading && current < end {
        position_cursor(current, 1);
        print!("{}", Palette::fg(&palette.colors.loading_fg));
        print!("   Loading... (simulated request)");
        print!("{}", Palette::reset());
        current += 1;
    }

    if let Some(error) = &panel.error {
        if current < end {
            position_cursor(current, 1);
            print!("{}", Palette::fg(&palette.colors.error_fg));
            print!("   error: {}", truncate_to(error, cols.saturating_sub(10)));
            print!("{}", Palette::reset());
            current += 1;
        }
    }

    if let Some(hint) = &panel.empty_hint {
        if !panel.loading && current < end {
            position_cursor(current, 1);
            print!("{}", Palette::fg(&palette.colors.text_dim));
            print!("   {hint}");
            print!("{}", Palette::reset());
            current += 1;
        }
    }

    if current == row {
        None
    } else {
        Some(current)
    }
}
