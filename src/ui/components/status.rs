//! Loading and error indicator line.

use crate::ui::helpers::{char_len, clear_row, truncate};
use crate::ui::theme::Theme;
use crate::ui::view::Indicator;
use crate::ui::viewmodel::StatusLine;

/// Renders a status message centered at the specified row.
///
/// The loading message uses `loading_fg`, the error message `error_fg` in bold.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_status(row: usize, status: &StatusLine, theme: &Theme, cols: usize) -> usize {
    clear_row(row, theme, cols);

    let message = truncate(&status.message, cols);
    let padding = cols.saturating_sub(char_len(&message)) / 2;

    match status.kind {
        Indicator::Loading => print!("{}", Theme::fg(&theme.colors.loading_fg)),
        Indicator::Error => print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.error_fg)),
    }
    print!("{}{message}", " ".repeat(padding));
    print!("{}", Theme::reset());
    row + 1
}
