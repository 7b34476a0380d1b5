//! Composable UI component renderers.
//!
//! Each component paints one part of the pane and returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with visible/total counts
//! - [`search`]: Search input box
//! - [`selectors`]: City and company selector bar
//! - [`cards`]: The card list
//! - [`status`]: Loading and error indicators
//! - [`footer`]: Keybinding hints
//!
//! # Layout Modes
//!
//! - [`render_normal_mode`]: Header + Selectors + Cards + Footer
//! - [`render_search_mode`]: Header + `SearchBar` + Selectors + Cards + Footer

pub mod cards;
mod footer;
mod header;
mod search;
mod selectors;
mod status;

pub use cards::{card_height, COLLAPSED_CARD_HEIGHT, EXPANDED_CARD_HEIGHT};

use crate::ui::helpers::clear_row;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchBarInfo, UIViewModel};

use cards::render_cards;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use selectors::render_selectors;
use status::render_status;

/// Rows used by everything except the card area in normal mode.
///
/// Blank top row, header, border, selectors, border, then border and footer
/// at the bottom.
pub const NORMAL_CHROME_ROWS: usize = 7;

/// Rows used by everything except the card area in search mode.
pub const SEARCH_CHROME_ROWS: usize = NORMAL_CHROME_ROWS + 3;

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, theme: &Theme, cols: usize) -> usize {
    clear_row(row, theme, cols);
    print!("{}", Theme::fg(&theme.colors.border));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the normal mode layout (no search bar).
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Selectors]
/// [Border]
/// [Status]
/// [Cards]
/// [Border]
/// [Footer]
/// ```
pub fn render_normal_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, theme, cols);
    current_row = render_selectors(current_row, &vm.selectors, theme, cols);
    current_row = render_border(current_row, theme, cols);

    render_body_and_footer(current_row, vm, theme, cols, rows);
}

/// Renders the search mode layout, with the search box under the header.
pub fn render_search_mode(vm: &UIViewModel, search: &SearchBarInfo, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, theme, cols);
    current_row = render_search_bar(current_row, search, theme, cols);
    current_row = render_selectors(current_row, &vm.selectors, theme, cols);
    current_row = render_border(current_row, theme, cols);

    render_body_and_footer(current_row, vm, theme, cols, rows);
}

fn render_body_and_footer(mut current_row: usize, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    let last_body_row = border_row.saturating_sub(1);

    if let Some(status) = &vm.status {
        current_row = render_status(current_row + 1, status, theme, cols) + 1;
    }
    render_cards(current_row, &vm.cards, theme, cols, last_body_row);

    render_border(border_row, theme, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
