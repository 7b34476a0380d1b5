//! View model types representing renderable UI state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) and
//! consumed by the painter. They contain no business logic, only display-ready
//! strings, flags and highlight ranges.

use crate::ui::view::Indicator;

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,
    /// Search input, present only while searching.
    pub search_bar: Option<SearchBarInfo>,
    /// City and company selector values.
    pub selectors: SelectorBarInfo,
    /// Cards inside the visible window, in render order.
    pub cards: Vec<CardItem>,
    /// Loading or error message, if one is visible.
    pub status: Option<StatusLine>,
    /// Key hints.
    pub footer: FooterInfo,
}

/// Display information for a single card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    pub name: String,
    pub username: String,
    pub email: String,
    pub company: String,
    pub city: String,
    pub phone: String,
    pub website: String,

    /// Whether the detail block (phone, website) is shown.
    pub expanded: bool,
    /// Whether the card is under the cursor.
    pub is_selected: bool,
    /// "View More" or "Hide Details".
    pub toggle_label: &'static str,

    /// Query matches inside `name`, as `(start, end)` character indices.
    pub name_highlights: Vec<(usize, usize)>,
    /// Query matches inside `username`.
    pub username_highlights: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text, including visible/total counts.
    pub title: String,
}

/// Selector bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorBarInfo {
    /// Selected city, or the default option label.
    pub city: String,
    /// Whether a city filter is active.
    pub city_active: bool,
    /// Number of city options (excluding the default).
    pub city_options: usize,
    /// Selected company, or the default option label.
    pub company: String,
    /// Whether a company filter is active.
    pub company_active: bool,
    /// Number of company options (excluding the default).
    pub company_options: usize,
}

/// Status indicator line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    /// Which indicator this is, for coloring.
    pub kind: Indicator,
    /// Message text.
    pub message: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}
