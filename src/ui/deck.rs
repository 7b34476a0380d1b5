//! Card deck: the rendered card area and its controls.
//!
//! [`CardDeck`] is the terminal counterpart of the page's card container. It
//! holds what the last render pass produced (one [`Card`] per visible record),
//! the per-card expansion flags, the cursor used to pick which card's toggle to
//! activate, the selector option lists and the two status indicators.

use crate::directory::FilterIndex;
use crate::domain::UserRecord;
use crate::ui::view::{Indicator, View};

/// Toggle label of a collapsed card.
pub const VIEW_MORE_LABEL: &str = "View More";

/// Toggle label of an expanded card.
pub const HIDE_DETAILS_LABEL: &str = "Hide Details";

/// One rendered card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Record shown on this card.
    pub user: UserRecord,
    /// Whether the phone/website detail block is shown.
    pub expanded: bool,
}

impl Card {
    const fn new(user: UserRecord) -> Self {
        Self { user, expanded: false }
    }

    /// Flips the expansion flag.
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Label of the card's toggle control for its current state.
    #[must_use]
    pub const fn toggle_label(&self) -> &'static str {
        if self.expanded {
            HIDE_DETAILS_LABEL
        } else {
            VIEW_MORE_LABEL
        }
    }
}

/// Rendered card area plus the controls around it.
///
/// # Example
///
/// ```rust
/// use roster::ui::{CardDeck, Indicator};
///
/// let deck = CardDeck::new();
/// assert!(deck.is_visible(Indicator::Loading));
/// assert!(!deck.is_visible(Indicator::Error));
/// assert!(deck.cards().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDeck {
    cards: Vec<Card>,
    cursor: usize,
    loading_visible: bool,
    error_visible: bool,
    city_options: Vec<String>,
    company_options: Vec<String>,
    render_passes: usize,
}

impl Default for CardDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl CardDeck {
    /// Creates an empty deck with the loading indicator visible.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            cursor: 0,
            loading_visible: true,
            error_visible: false,
            city_options: Vec::new(),
            company_options: Vec::new(),
            render_passes: 0,
        }
    }

    /// Cards produced by the last render pass.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Index of the card under the cursor.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of render passes so far.
    #[must_use]
    pub const fn render_passes(&self) -> usize {
        self.render_passes
    }

    /// Options appended to the city selector.
    #[must_use]
    pub fn city_options(&self) -> &[String] {
        &self.city_options
    }

    /// Options appended to the company selector.
    #[must_use]
    pub fn company_options(&self) -> &[String] {
        &self.company_options
    }

    /// Returns whether `kind` is currently visible.
    #[must_use]
    pub const fn is_visible(&self, kind: Indicator) -> bool {
        match kind {
            Indicator::Loading => self.loading_visible,
            Indicator::Error => self.error_visible,
        }
    }

    /// Moves the cursor down by one card, wrapping to the top.
    pub fn move_cursor_down(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.cards.len();
    }

    /// Moves the cursor up by one card, wrapping to the bottom.
    pub fn move_cursor_up(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        if self.cursor == 0 {
            self.cursor = self.cards.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// Activates the toggle of the card at `index`.
    ///
    /// Returns the new expansion state, or `None` if there is no such card.
    /// Sibling cards are untouched.
    pub fn toggle_card(&mut self, index: usize) -> Option<bool> {
        let card = self.cards.get_mut(index)?;
        card.toggle();
        tracing::debug!(
            index = index,
            username = %card.user.username,
            expanded = card.expanded,
            "card toggled"
        );
        Some(card.expanded)
    }

    /// Activates the toggle of the card under the cursor.
    pub fn toggle_at_cursor(&mut self) -> Option<bool> {
        self.toggle_card(self.cursor)
    }
}

impl View for CardDeck {
    fn render_cards(&mut self, records: &[&UserRecord]) {
        self.cards = records.iter().map(|user| Card::new((*user).clone())).collect();
        self.cursor = 0;
        self.render_passes += 1;

        tracing::debug!(
            card_count = self.cards.len(),
            render_pass = self.render_passes,
            "cards rendered"
        );
    }

    fn set_indicator(&mut self, kind: Indicator, visible: bool) {
        tracing::debug!(indicator = ?kind, visible = visible, "indicator changed");
        match kind {
            Indicator::Loading => self.loading_visible = visible,
            Indicator::Error => self.error_visible = visible,
        }
    }

    fn populate_filters(&mut self, index: &FilterIndex) {
        self.city_options.extend(index.cities.iter().cloned());
        self.company_options.extend(index.companies.iter().cloned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, Company};

    fn user(name: &str) -> UserRecord {
        UserRecord {
            id: None,
            name: name.to_string(),
            username: name.to_lowercase(),
            email: "e@example.org".to_string(),
            address: Address { city: "City".to_string() },
            company: Company { name: "Co".to_string() },
            phone: "555".to_string(),
            website: "example.org".to_string(),
        }
    }

    fn deck_with(names: &[&str]) -> CardDeck {
        let users: Vec<UserRecord> = names.iter().map(|n| user(n)).collect();
        let refs: Vec<&UserRecord> = users.iter().collect();
        let mut deck = CardDeck::new();
        deck.render_cards(&refs);
        deck
    }

    #[test]
    fn render_keeps_order_and_starts_collapsed() {
        let deck = deck_with(&["A", "B", "C"]);

        let names: Vec<&str> = deck.cards().iter().map(|c| c.user.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert!(deck.cards().iter().all(|c| !c.expanded));
        assert!(deck.cards().iter().all(|c| c.toggle_label() == VIEW_MORE_LABEL));
    }

    #[test]
    fn toggling_affects_only_that_card() {
        let mut deck = deck_with(&["A", "B", "C"]);

        assert_eq!(deck.toggle_card(1), Some(true));

        let flags: Vec<bool> = deck.cards().iter().map(|c| c.expanded).collect();
        assert_eq!(flags, vec![false, true, false]);
        assert_eq!(deck.cards()[1].toggle_label(), HIDE_DETAILS_LABEL);

        assert_eq!(deck.toggle_card(1), Some(false));
        assert_eq!(deck.cards()[1].toggle_label(), VIEW_MORE_LABEL);
    }

    #[test]
    fn toggling_missing_card_is_a_no_op() {
        let mut deck = deck_with(&["A"]);

        assert_eq!(deck.toggle_card(3), None);
        assert!(!deck.cards()[0].expanded);
    }

    #[test]
    fn rerender_resets_expansion_and_cursor() {
        let users: Vec<UserRecord> = ["A", "B"].iter().map(|n| user(n)).collect();
        let refs: Vec<&UserRecord> = users.iter().collect();
        let mut deck = CardDeck::new();
        deck.render_cards(&refs);
        deck.move_cursor_down();
        deck.toggle_at_cursor();
        deck.toggle_card(0);

        deck.render_cards(&refs);

        assert!(deck.cards().iter().all(|c| !c.expanded));
        assert_eq!(deck.cursor(), 0);
        assert_eq!(deck.render_passes(), 2);
    }

    #[test]
    fn cursor_wraps_both_ways() {
        let mut deck = deck_with(&["A", "B", "C"]);

        deck.move_cursor_up();
        assert_eq!(deck.cursor(), 2);
        deck.move_cursor_down();
        assert_eq!(deck.cursor(), 0);
    }

    #[test]
    fn cursor_ignores_empty_deck() {
        let mut deck = CardDeck::new();

        deck.move_cursor_down();
        deck.move_cursor_up();

        assert_eq!(deck.cursor(), 0);
        assert_eq!(deck.toggle_at_cursor(), None);
    }

    #[test]
    fn populate_appends_options() {
        let mut deck = CardDeck::new();
        let index = FilterIndex {
            cities: vec!["Gwenborough".to_string()],
            companies: vec!["Romaguera-Crona".to_string(), "Deckow-Crist".to_string()],
        };

        deck.populate_filters(&index);

        assert_eq!(deck.city_options(), ["Gwenborough".to_string()]);
        assert_eq!(deck.company_options().len(), 2);
    }
}
