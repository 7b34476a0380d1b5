//! City and company selector bar.

use crate::ui::helpers::{clear_row, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SelectorBarInfo;

/// Renders both selectors on one row.
///
/// ```text
///  City: Gwenborough (10) [c/C]    Company: All companies (10) [o/O]
/// ```
///
/// Active selections use the accent color, the default option is dimmed.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_selectors(row: usize, selectors: &SelectorBarInfo, theme: &Theme, cols: usize) -> usize {
    clear_row(row, theme, cols);

    let half = cols / 2;
    let value_width = half.saturating_sub(20);

    render_selector(
        "City",
        &truncate(&selectors.city, value_width),
        selectors.city_active,
        selectors.city_options,
        "c/C",
        theme,
    );

    position_cursor(row, half + 1);
    render_selector(
        "Company",
        &truncate(&selectors.company, value_width),
        selectors.company_active,
        selectors.company_options,
        "o/O",
        theme,
    );

    print!("{}", Theme::reset());
    row + 1
}

fn render_selector(label: &str, value: &str, active: bool, options: usize, keys: &str, theme: &Theme) {
    print!("{}", theme.base());
    print!(" {}{label}: ", Theme::fg(&theme.colors.text_dim));
    if active {
        print!("{}{}{value}", Theme::bold(), Theme::fg(&theme.colors.accent));
        print!("{}{}", Theme::reset(), theme.base());
    } else {
        print!("{}{value}", Theme::fg(&theme.colors.foreground));
    }
    print!("{} ({options}) [{keys}]", Theme::fg(&theme.colors.text_dim));
}
