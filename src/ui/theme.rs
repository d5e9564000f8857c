//! Palette management and ANSI escape sequence generation.
//!
//! The UI renders with 24-bit ANSI colors resolved from a [`Palette`]. Two
//! built-in palettes back the demo's light and dark modes; a custom pair can
//! be loaded from a TOML file to override both.
//!
//! # TOML format
//!
//! ```toml
//! [light]
//! name = "my-light"
//! [light.colors]
//! header_fg = "#1e293b"
//! accent = "#2563eb"
//! text_normal = "#0f172a"
//! text_dim = "#64748b"
//! border = "#cbd5e1"
//! search_border = "#2563eb"
//! value_fg = "#9333ea"
//! loading_fg = "#b45309"
//! error_fg = "#b91c1c"
//!
//! [dark]
//! # same shape
//! ```

use crate::domain::error::{Result, StatewiseError};
use crate::store::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme for one theme mode.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Palette {
    /// Human-readable palette name.
    pub name: String,
    /// Color values for all UI elements.
    pub colors: PaletteColors,
}

/// Color definitions, as hex strings (e.g. `"#cdd6f4"`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaletteColors {
    /// Header title color.
    pub header_fg: String,
    /// Panel heading color.
    pub accent: String,
    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text (footer, hints, notes).
    pub text_dim: String,
    /// Border and separator lines.
    pub border: String,
    /// Search box border when focused.
    pub search_border: String,
    /// Counter value color.
    pub value_fg: String,
    /// Loading indicator color.
    pub loading_fg: String,
    /// Error message color.
    pub error_fg: String,
}

/// The light/dark palette pair the renderer selects from.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaletteSet {
    /// Palette used in light mode.
    pub light: Palette,
    /// Palette used in dark mode.
    pub dark: Palette,
}

impl PaletteSet {
    /// Loads a palette pair from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse as a
    /// light/dark palette pair.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(&path)
            .map_err(|e| StatewiseError::Palette(format!("failed to read palette file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| StatewiseError::Palette(format!("failed to parse palette TOML: {e}")))
    }

    /// Palette for the given mode.
    #[must_use]
    pub const fn for_mode(&self, mode: ThemeMode) -> &Palette {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

impl Default for PaletteSet {
    fn default() -> Self {
        Self {
            light: Palette {
                name: "statewise-light".to_string(),
                colors: PaletteColors {
                    header_fg: "#1e293b".to_string(),
                    accent: "#2563eb".to_string(),
                    text_normal: "#0f172a".to_string(),
                    text_dim: "#64748b".to_string(),
                    border: "#cbd5e1".to_string(),
                    search_border: "#2563eb".to_string(),
                    value_fg: "#9333ea".to_string(),
                    loading_fg: "#b45309".to_string(),
                    error_fg: "#b91c1c".to_string(),
                },
            },
            dark: Palette {
                name: "statewise-dark".to_string(),
                colors: PaletteColors {
                    header_fg: "#cdd6f4".to_string(),
                    accent: "#89b4fa".to_string(),
                    text_normal: "#cdd6f4".to_string(),
                    text_dim: "#6c7086".to_string(),
                    border: "#45475a".to_string(),
                    search_border: "#f5c2e7".to_string(),
                    value_fg: "#cba6f7".to_string(),
                    loading_fg: "#f9e2af".to_string(),
                    error_fg: "#f38ba8".to_string(),
                },
            },
        }
    }
}

impl Palette {
    /// Converts a hex color to an RGB tuple.
    ///
    /// Falls back to white on malformed input rather than failing a frame.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI bold escape.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// ANSI reset escape, clearing all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}
