//! Header component renderer.
//!
//! Renders the title bar: the plugin name plus the visible/total card counts,
//! centered over the pane background.

use crate::ui::helpers::{char_len, clear_row, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at the specified row.
///
/// The title is centered and bold. When the theme defines `header_bg` the
/// whole row uses it instead of the pane background.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    clear_row(row, theme, cols);

    let title = truncate(&header.title, cols);
    let title_len = char_len(&title);
    let padding = cols.saturating_sub(title_len) / 2;

    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{title}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));

    print!("{}", Theme::reset());
    row + 1
}
