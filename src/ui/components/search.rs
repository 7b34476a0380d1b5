//! Search bar component renderer.
//!
//! A three-line bordered box holding the query being typed.

use crate::ui::helpers::{char_len, clear_row, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search input box at the specified row.
///
/// ```text
/// [margin] ┌─────────────┐ [margin]
/// [margin] │ Search: ... │ [margin]
/// [margin] └─────────────┘ [margin]
/// ```
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    clear_row(row, theme, cols);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    // Keep the tail of a long query visible, that is where the caret is.
    let prefix = " Search: ";
    let room = inner_width.saturating_sub(char_len(prefix) + 1);
    let query_len = char_len(&search.query);
    let shown: String = if query_len > room {
        search.query.chars().skip(query_len - room).collect()
    } else {
        search.query.clone()
    };
    let search_text = truncate(&format!("{prefix}{shown}_"), inner_width);
    let padding = inner_width.saturating_sub(char_len(&search_text));

    clear_row(row + 1, theme, cols);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}│");
    print!("{}", Theme::fg(&theme.colors.foreground));
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{border}│");
    print!("{}", Theme::reset());

    clear_row(row + 2, theme, cols);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{border}└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
