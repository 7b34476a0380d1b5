//! Light/dark presentation of the whole pane.
//!
//! Dark mode is one boolean. Flipping it swaps three things together: the
//! mode flag itself, the pane background and the pane foreground. The pair of
//! palettes is fixed at startup, so toggling twice always lands on the exact
//! presentation the pane started with.

use crate::ui::theme::Theme;

/// Root presentation currently applied to the pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    /// Dark mode on/off.
    pub dark: bool,
    /// Hex color painted behind every cell.
    pub background: String,
    /// Hex color of plain text.
    pub foreground: String,
}

/// Theme State plus the two palettes it selects between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    dark: bool,
    light_theme: Theme,
    dark_theme: Theme,
}

impl Appearance {
    /// Creates an appearance starting in light or dark mode.
    #[must_use]
    pub const fn new(light_theme: Theme, dark_theme: Theme, start_dark: bool) -> Self {
        Self {
            dark: start_dark,
            light_theme,
            dark_theme,
        }
    }

    /// Whether dark mode is on.
    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.dark
    }

    /// Flips dark mode.
    pub fn toggle(&mut self) {
        self.dark = !self.dark;
        tracing::debug!(dark = self.dark, theme = %self.active().name, "theme toggled");
    }

    /// Palette for the current mode.
    #[must_use]
    pub const fn active(&self) -> &Theme {
        if self.dark {
            &self.dark_theme
        } else {
            &self.light_theme
        }
    }

    /// The coupled mode/background/foreground triple currently applied.
    ///
    /// # Example
    ///
    /// ```rust
    /// use roster::ui::Appearance;
    ///
    /// let mut appearance = Appearance::default();
    /// let before = appearance.presentation();
    ///
    /// appearance.toggle();
    /// assert_ne!(appearance.presentation(), before);
    /// appearance.toggle();
    /// assert_eq!(appearance.presentation(), before);
    /// ```
    #[must_use]
    pub fn presentation(&self) -> Presentation {
        let theme = self.active();
        Presentation {
            dark: self.dark,
            background: theme.colors.background.clone(),
            foreground: theme.colors.foreground.clone(),
        }
    }
}

impl Default for Appearance {
    /// Light mode with the built-in Latte/Mocha pair.
    fn default() -> Self {
        let light = Theme::from_name(super::theme::DEFAULT_LIGHT_THEME).unwrap_or_default();
        Self::new(light, Theme::default(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_swaps_mode_and_both_colors() {
        let mut appearance = Appearance::default();
        let light = appearance.presentation();

        appearance.toggle();
        let dark = appearance.presentation();

        assert!(!light.dark);
        assert!(dark.dark);
        assert_ne!(light.background, dark.background);
        assert_ne!(light.foreground, dark.foreground);
    }

    #[test]
    fn double_toggle_restores_start_dark_too() {
        let light = Theme::from_name("catppuccin-latte").unwrap();
        let mut appearance = Appearance::new(light, Theme::default(), true);
        let start = appearance.presentation();

        appearance.toggle();
        appearance.toggle();

        assert!(appearance.is_dark());
        assert_eq!(appearance.presentation(), start);
    }
}
