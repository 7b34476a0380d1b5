//! Card list component renderer.
//!
//! Each card is a left-barred block of lines:
//!
//! ```text
//!  ▌ Leanne Graham
//!  ▌ @Bret
//!  ▌ Email    Sincere@april.biz
//!  ▌ Company  Romaguera-Crona
//!  ▌ City     Gwenborough
//!  ▌ Phone    1-770-736-8031 x56442      (expanded only)
//!  ▌ Website  hildegard.org              (expanded only)
//!  ▌ [View More]
//! ```
//!
//! followed by one spacer row. The bar uses `cursor_border` on the card under
//! the cursor and `card_border` elsewhere.

use crate::ui::helpers::{self, char_len, clear_row, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;

/// Rows taken by a collapsed card, spacer included.
pub const COLLAPSED_CARD_HEIGHT: usize = 7;

/// Rows taken by an expanded card, spacer included.
pub const EXPANDED_CARD_HEIGHT: usize = 9;

/// Width of the bar plus the gap after it.
const GUTTER: usize = 4;

/// Field label column width.
const LABEL_WIDTH: usize = 9;

/// Rows a card occupies for its expansion state.
#[must_use]
pub const fn card_height(expanded: bool) -> usize {
    if expanded {
        EXPANDED_CARD_HEIGHT
    } else {
        COLLAPSED_CARD_HEIGHT
    }
}

/// Renders `cards` from `row` down to `last_row` inclusive.
///
/// A card that does not fit entirely is cut at `last_row`.
///
/// # Returns
///
/// The next available row position
pub fn render_cards(row: usize, cards: &[CardItem], theme: &Theme, cols: usize, last_row: usize) -> usize {
    let mut current_row = row;
    for card in cards {
        if current_row > last_row {
            break;
        }
        current_row = render_card(current_row, card, theme, cols, last_row);
    }
    current_row
}

fn render_card(row: usize, card: &CardItem, theme: &Theme, cols: usize, last_row: usize) -> usize {
    let bar = if card.is_selected {
        Theme::fg(&theme.colors.cursor_border)
    } else {
        Theme::fg(&theme.colors.card_border)
    };
    let width = cols.saturating_sub(GUTTER + 1);
    let mut current_row = row;

    let mut line = |paint: &dyn Fn()| {
        if current_row <= last_row {
            clear_row(current_row, theme, cols);
            print!(" {bar}▌{}  ", theme.base());
            paint();
            print!("{}", Theme::reset());
        }
        current_row += 1;
    };

    line(&|| {
        let restore = format!("{}{}", theme.base(), Theme::bold());
        print!("{restore}");
        highlighted(&card.name, &card.name_highlights, width, theme, &restore);
    });

    line(&|| {
        let restore = format!("{}{}", theme.base(), Theme::fg(&theme.colors.accent));
        print!("{restore}@");
        highlighted(&card.username, &card.username_highlights, width.saturating_sub(1), theme, &restore);
    });

    line(&|| field("Email", &card.email, width, theme));
    line(&|| field("Company", &card.company, width, theme));
    line(&|| field("City", &card.city, width, theme));

    if card.expanded {
        line(&|| field("Phone", &card.phone, width, theme));
        line(&|| field("Website", &card.website, width, theme));
    }

    line(&|| {
        if card.is_selected {
            print!("{}", Theme::bold());
        }
        print!("{}[{}]", Theme::fg(&theme.colors.accent), card.toggle_label);
    });

    if current_row <= last_row {
        clear_row(current_row, theme, cols);
        print!("{}", Theme::reset());
    }
    current_row + 1
}

fn field(label: &str, value: &str, width: usize, theme: &Theme) {
    print!("{}{label:<w$}", Theme::fg(&theme.colors.text_dim), w = LABEL_WIDTH);
    print!("{}{}", Theme::fg(&theme.colors.foreground), truncate(value, width.saturating_sub(LABEL_WIDTH)));
}

/// Prints `text` with its match ranges, or truncated plain when it is too wide.
///
/// Highlight ranges index the full text, so a truncated value drops them.
fn highlighted(text: &str, ranges: &[(usize, usize)], width: usize, theme: &Theme, restore: &str) {
    if char_len(text) > width {
        print!("{}", truncate(text, width));
    } else {
        helpers::render_highlighted_text(text, ranges, theme, restore);
    }
}
