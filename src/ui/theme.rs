//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme system for the plugin, supporting both
//! built-in themes (Catppuccin variants) and custom themes loaded from TOML files.
//! It provides utilities for converting hex colors to ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `catppuccin-latte`: Light theme with soft pastels (default light palette)
//! - `catppuccin-mocha`: Dark theme with warm tones (default dark palette)
//! - `catppuccin-frappe`: Cool dark theme
//! - `catppuccin-macchiato`: Warm dark theme
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! background = "#1e1e2e"
//! foreground = "#cdd6f4"
//! header_fg = "#cba6f7"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! card_border = "#45475a"
//! cursor_border = "#f5c2e7"
//! accent = "#89b4fa"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! loading_fg = "#89b4fa"
//! error_fg = "#f38ba8"
//! ```

use crate::domain::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the built-in palette used when dark mode is off.
pub const DEFAULT_LIGHT_THEME: &str = "catppuccin-latte";

/// Name of the built-in palette used when dark mode is on.
pub const DEFAULT_DARK_THEME: &str = "catppuccin-mocha";

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g., "#cdd6f4"). `background` and `foreground`
/// are painted across the whole pane, so switching palettes recolors every
/// cell, not just the text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Pane background.
    pub background: String,
    /// Default text color.
    pub foreground: String,

    /// Header text color.
    pub header_fg: String,
    /// Optional header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Dimmed text color (footer, labels).
    pub text_dim: String,
    /// Separator line color.
    pub border: String,

    /// Left bar of an unselected card.
    pub card_border: String,
    /// Left bar of the card under the cursor.
    pub cursor_border: String,
    /// Username, toggle label and active selector values.
    pub accent: String,

    /// Search bar border color.
    pub search_bar_border: String,
    /// Query match highlight foreground.
    pub match_highlight_fg: String,
    /// Query match highlight background.
    pub match_highlight_bg: String,

    /// Loading indicator color.
    pub loading_fg: String,
    /// Error indicator color.
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use roster::ui::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Theme`] if the file cannot be read or the TOML
    /// content does not describe a complete palette.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| RosterError::Theme(format!("Failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| RosterError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Resolves a palette from an optional file, an optional name and a fallback name.
    ///
    /// The file wins over the name. Any failure is logged and falls through to
    /// the next source; the fallback must be a built-in name.
    #[must_use]
    pub fn resolve(file: Option<&str>, name: Option<&str>, fallback: &str) -> Self {
        if let Some(file) = file {
            match Self::from_file(file) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::debug!(theme_file = %file, error = %e, "failed to load theme from file");
                }
            }
        }

        if let Some(name) = name {
            if let Some(theme) = Self::from_name(name) {
                return theme;
            }
            tracing::debug!(theme_name = %name, "unknown theme name");
        }

        Self::from_name(fallback).unwrap_or_default()
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    ///
    /// ```rust
    /// use roster::ui::Theme;
    ///
    /// assert_eq!(Theme::fg("#1e1e2e"), "\u{1b}[38;2;30;30;46m");
    /// ```
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

    /// Background + foreground escape pair for plain pane text.
    #[must_use]
    pub fn base(&self) -> String {
        format!("{}{}", Self::bg(&self.colors.background), Self::fg(&self.colors.foreground))
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default dark palette (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name(DEFAULT_DARK_THEME)
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn every_builtin_parses() {
        for name in ["catppuccin-mocha", "catppuccin-latte", "catppuccin-frappe", "catppuccin-macchiato"] {
            let theme = Theme::from_name(name).unwrap_or_else(|| panic!("{name} should parse"));
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn light_and_dark_defaults_differ() {
        let light = Theme::from_name(DEFAULT_LIGHT_THEME).unwrap();
        let dark = Theme::default();

        assert_ne!(light.colors.background, dark.colors.background);
        assert_ne!(light.colors.foreground, dark.colors.foreground);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut theme = Theme::default();
        theme.name = "custom".to_string();
        theme.colors.background = "#000000".to_string();
        write!(file, "{}", toml::to_string(&theme).unwrap()).unwrap();

        let loaded = Theme::from_file(file.path()).unwrap();

        assert_eq!(loaded.name, "custom");
        assert_eq!(loaded.colors.background, "#000000");
    }

    #[test]
    fn incomplete_file_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = \"broken\"\n[colors]\nbackground = \"#000000\"\n").unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();

        assert!(matches!(err, RosterError::Theme(_)));
    }

    #[test]
    fn resolve_falls_back_in_order() {
        let theme = Theme::resolve(Some("/nonexistent/theme.toml"), Some("catppuccin-frappe"), DEFAULT_LIGHT_THEME);
        assert_eq!(theme.name, "catppuccin-frappe");

        let theme = Theme::resolve(None, Some("nope"), DEFAULT_LIGHT_THEME);
        assert_eq!(theme.name, DEFAULT_LIGHT_THEME);
    }

    #[test]
    fn malformed_hex_renders_white() {
        assert_eq!(Theme::fg("#12"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("zzzzzz"), "\u{1b}[48;2;255;255;255m");
    }
}
