//! Counter and theme panel renderers.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Palette;
use crate::ui::viewmodel::{CounterPanel, ThemePanel};

/// Renders the counter panel: heading plus the value with its key hints.
pub fn render_counter_panel(row: usize, panel: &CounterPanel, palette: &Palette) -> usize {
    position_cursor(row, 1);
    print!("{}", Palette::fg(&palette.colors.accent));
    print!(" {}", panel.heading);
    print!("{}", Palette::reset());

    position_cursor(row + 1, 1);
    print!("   ");
    print!("{}{}", Palette::bold(), Palette::fg(&palette.colors.value_fg));
    print!("{}", panel.value);
    print!("{}", Palette::reset());
    print!("{}", Palette::fg(&palette.colors.text_dim));
    print!("   (+ / - / 0)");
    print!("{}", Palette::reset());

    row + 2
}

/// Renders the theme panel: heading plus the current mode label.
pub fn render_theme_panel(row: usize, panel: &ThemePanel, palette: &Palette) -> usize {
    position_cursor(row, 1);
    print!("{}", Palette::fg(&palette.colors.accent));
    print!(" {}", panel.heading);
    print!("{}", Palette::reset());

    position_cursor(row + 1, 1);
    print!("   ");
    print!("{}", Palette::fg(&palette.colors.text_normal));
    print!("current: {}", panel.mode_label);
    print!("{}", Palette::fg(&palette.colors.text_dim));
    print!("   (t to toggle)");
    print!("{}", Palette::reset());

    row + 2
}
