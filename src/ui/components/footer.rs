//! Footer component renderer.

use crate::ui::helpers::{char_len, clear_row, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centered and dimmed at the specified row.
///
/// Text wider than the pane is truncated so the layout never wraps.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    clear_row(row, theme, cols);

    let help_text = truncate(&footer.keybindings, cols);
    let text_len = char_len(&help_text);
    let padding = cols.saturating_sub(text_len) / 2;

    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}
