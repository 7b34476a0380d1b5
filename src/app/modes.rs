//! Input mode state for the application.
//!
//! - **Normal**: keys are commands (cursor, toggle, selectors, theme)
//! - **Search**: keys edit the free-text query

/// Current input handling mode.
///
/// Determines how keys are mapped, whether the search bar is shown and which
/// hints the footer displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Default navigation and command mode.
    #[default]
    Normal,

    /// The search bar has focus. Printable keys append to the query and the
    /// cards are re-filtered on every keystroke.
    Search,
}
