//! Shared rendering utilities and helpers.
//!
//! Low-level painting helpers used by several components: cursor placement,
//! full-width line painting over the pane background, character-safe
//! truncation, and query match highlighting.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column (1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Truncates `text` to at most `max` characters, ending in `...` when cut.
///
/// # Example
///
/// ```rust
/// use roster::ui::helpers::truncate;
///
/// assert_eq!(truncate("Romaguera-Crona", 20), "Romaguera-Crona");
/// assert_eq!(truncate("Romaguera-Crona", 8), "Romag...");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if char_len(text) <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Paints a full row in the pane background, leaving the cursor at its start.
///
/// Every component starts its rows with this so the active palette's
/// background covers the whole pane.
pub fn clear_row(row: usize, theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    print!("{}", theme.base());
    print!("{}", " ".repeat(cols));
    print!("{}", Theme::reset());
    position_cursor(row, 1);
    print!("{}", theme.base());
}

/// Finds every case-insensitive occurrence of `query` in `text`.
///
/// Returns non-overlapping `(start, end)` ranges in character indices with an
/// exclusive end. Characters are compared by their first lowercase mapping so
/// indices line up with the original text.
///
/// # Example
///
/// ```rust
/// use roster::ui::helpers::match_ranges;
///
/// assert_eq!(match_ranges("Bret", "bre"), vec![(0, 3)]);
/// assert_eq!(match_ranges("Anna Nash", "na"), vec![(2, 4), (5, 7)]);
/// assert!(match_ranges("Bret", "").is_empty());
/// ```
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let fold = |c: char| c.to_lowercase().next().unwrap_or(c);
    let haystack: Vec<char> = text.chars().map(fold).collect();
    let needle: Vec<char> = query.chars().map(fold).collect();

    let mut ranges = Vec::new();
    if needle.is_empty() || needle.len() > haystack.len() {
        return ranges;
    }

    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        if haystack[start..start + needle.len()] == needle[..] {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}

/// Renders text with highlighted character ranges for query matches.
///
/// `restore` is the escape sequence re-applied after each highlighted section
/// (typically the pane base plus the text's own color).
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, restore: &str) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{restore}");

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate("Zoë Ångström", 12), "Zoë Ångström");
        assert_eq!(truncate("Zoë Ångström", 6), "Zoë...");
        assert_eq!(truncate("abc", 2), "ab");
    }

    #[test]
    fn match_ranges_are_character_indexed() {
        assert_eq!(match_ranges("Élodie Élan", "él"), vec![(0, 2), (7, 9)]);
    }

    #[test]
    fn match_ranges_ignore_longer_query() {
        assert!(match_ranges("Bret", "brett").is_empty());
    }
}
