//! Shared rendering utilities.

/// Positions the cursor at a row and column (1-indexed) via ANSI escape.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Clears the whole screen.
pub fn clear_screen() {
    print!("\u{1b}[2J");
}

/// Truncates a string to fit a column width, appending `...` when cut.
#[must_use]
pub fn truncate_to(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    let keep = max_width.saturating_sub(3);
    let kept: String = text.chars().take(keep).collect();
    format!("{kept}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to("Apple", 10), "Apple");
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        assert_eq!(truncate_to("Elderberry", 8), "Elder...");
    }
}
