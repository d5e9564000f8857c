//! Footer component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Palette;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar, centered and padded to the full width.
pub fn render_footer(row: usize, footer: &FooterInfo, palette: &Palette, cols: usize) -> usize {
    let help_text = &footer.keybindings;

    let text_len = help_text.chars().count().min(cols);
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(row, 1);
    print!("{}", Palette::fg(&palette.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Palette::reset());
    row + 1
}
