//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system, supporting built-in themes
//! (Catppuccin variants) and custom themes loaded from TOML files, plus the
//! hex-to-ANSI conversion used by the component renderers.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! filter_bar_border = "#f5c2e7"
//! empty_state_fg = "#89b4fa"
//! saved_indicator_fg = "#f9e2af"
//! overlay_border = "#f5c2e7"
//! toast_success = "#a6e3a1"
//! toast_error = "#f38ba8"
//! toast_info = "#89b4fa"
//! ```

use crate::domain::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g. `"#cdd6f4"`). The optional header
/// background defaults to `None`, letting themes opt out of a filled title
/// bar.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected card or row foreground color.
    pub selection_fg: String,
    /// Selected card or row background color.
    pub selection_bg: String,

    /// Normal text color.
    pub text_normal: String,
    /// Dimmed text color (footer, secondary card lines).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Filter bar border color while a field is being edited.
    pub filter_bar_border: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Color of the saved marker on result cards.
    pub saved_indicator_fg: String,

    /// Detail overlay border color.
    pub overlay_border: String,

    /// Toast colors per severity.
    pub toast_success: String,
    pub toast_error: String,
    pub toast_info: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `catppuccin-mocha`, `catppuccin-latte`.
    ///
    /// Returns `None` if the theme name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Theme`] if the file cannot be read or does not parse
    /// as a complete theme definition.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| Error::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Strips a `#` prefix if present. Returns white on parse errors so a
    /// bad color degrades visibly instead of crashing the frame.
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

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence, clearing all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }

    /// Returns the toast color for a severity.
    #[must_use]
    pub fn toast_color(&self, severity: crate::app::state::ToastSeverity) -> &str {
        use crate::app::state::ToastSeverity;
        match severity {
            ToastSeverity::Success => &self.colors.toast_success,
            ToastSeverity::Error => &self.colors.toast_error,
            ToastSeverity::Info => &self.colors.toast_info,
        }
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which would be a build
    /// defect.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_themes_parse() {
        for name in ["catppuccin-mocha", "catppuccin-latte"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn unknown_theme_name_is_none() {
        assert!(Theme::from_name("solarized-unknown").is_none());
    }

    #[test]
    fn fg_produces_truecolor_sequence() {
        assert_eq!(Theme::fg("#ff0080"), "\u{001b}[38;2;255;0;128m");
    }

    #[test]
    fn invalid_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("nope"), "\u{001b}[38;2;255;255;255m");
    }
}
