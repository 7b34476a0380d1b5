//! Application state and view model computation.
//!
//! [`AppState`] owns everything the plugin knows: the loaded collection, the
//! filter inputs, the card deck that acts as the rendered surface, and the
//! appearance. The event handler mutates it; the renderer reads it through
//! [`AppState::compute_viewmodel`].
//!
//! # Example
//!
//! ```rust
//! use roster::app::AppState;
//! use roster::ui::Appearance;
//!
//! let state = AppState::new(Appearance::default());
//! let viewmodel = state.compute_viewmodel(24);
//! assert!(viewmodel.cards.is_empty());
//! assert!(viewmodel.status.is_some()); // loading
//! ```

use super::modes::InputMode;
use crate::directory::{self, cycle_selection, FilterState, LoadPhase, Step};
use crate::domain::{Result, UserRecord};
use crate::ui::components::{card_height, NORMAL_CHROME_ROWS, SEARCH_CHROME_ROWS};
use crate::ui::helpers::match_ranges;
use crate::ui::viewmodel::{
    CardItem, FooterInfo, HeaderInfo, SearchBarInfo, SelectorBarInfo, StatusLine, UIViewModel,
};
use crate::ui::{Appearance, Card, CardDeck, Indicator, View};
use std::ops::Range;

/// Default option label of the city selector.
pub const ALL_CITIES_LABEL: &str = "All cities";

/// Default option label of the company selector.
pub const ALL_COMPANIES_LABEL: &str = "All companies";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded collection. Empty until the load succeeds, then never changed.
    pub users: Vec<UserRecord>,

    /// Progress of the single directory load.
    pub load_phase: LoadPhase,

    /// Whether the directory request has been issued.
    pub request_issued: bool,

    /// Query and selector values.
    pub filter: FilterState,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Rendered cards, cursor, selector options and indicators.
    pub deck: CardDeck,

    /// Light/dark mode and its two palettes.
    pub appearance: Appearance,
}

impl AppState {
    /// Creates the startup state: nothing loaded, loading indicator visible.
    #[must_use]
    pub fn new(appearance: Appearance) -> Self {
        Self {
            users: Vec::new(),
            load_phase: LoadPhase::default(),
            request_issued: false,
            filter: FilterState::default(),
            input_mode: InputMode::Normal,
            deck: CardDeck::new(),
            appearance,
        }
    }

    /// Re-renders the deck from the full collection and the current filter.
    pub fn apply_filters(&mut self) {
        let visible = directory::apply_filters(&self.users, &self.filter);
        self.deck.render_cards(&visible);
    }

    /// Applies the load outcome unless the load has already settled.
    ///
    /// Returns `true` if the outcome was applied.
    pub fn settle_load(&mut self, outcome: Result<Vec<UserRecord>>) -> bool {
        if self.load_phase.is_settled() {
            tracing::debug!(phase = ?self.load_phase, "ignoring late directory outcome");
            return false;
        }

        let (phase, users) = directory::settle(&mut self.deck, outcome);
        self.load_phase = phase;
        self.users = users;
        true
    }

    /// Steps the city selector and re-filters.
    pub fn cycle_city(&mut self, step: Step) {
        self.filter.city = cycle_selection(self.deck.city_options(), self.filter.city.as_deref(), step);
        tracing::debug!(city = ?self.filter.city, "city selection changed");
        self.apply_filters();
    }

    /// Steps the company selector and re-filters.
    pub fn cycle_company(&mut self, step: Step) {
        self.filter.company = cycle_selection(self.deck.company_options(), self.filter.company.as_deref(), step);
        tracing::debug!(company = ?self.filter.company, "company selection changed");
        self.apply_filters();
    }

    /// Computes a renderable UI view model for a pane `rows` tall.
    ///
    /// Only the cards that fit around the cursor are included; see
    /// [`card_window`]. Widths are handled by the painter.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize) -> UIViewModel {
        let cards = self.deck.cards();
        let heights: Vec<usize> = cards.iter().map(|card| card_height(card.expanded)).collect();
        let window = card_window(&heights, self.deck.cursor(), self.calculate_available_rows(rows));

        let card_items = cards[window.clone()]
            .iter()
            .zip(window)
            .map(|(card, index)| self.compute_card_item(card, index == self.deck.cursor()))
            .collect();

        UIViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            selectors: self.compute_selectors(),
            cards: card_items,
            status: self.compute_status(),
            footer: self.compute_footer(),
        }
    }

    fn compute_card_item(&self, card: &Card, is_selected: bool) -> CardItem {
        let user = &card.user;
        CardItem {
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            company: user.company_name().to_string(),
            city: user.city().to_string(),
            phone: user.phone.clone(),
            website: user.website.clone(),
            expanded: card.expanded,
            is_selected,
            toggle_label: card.toggle_label(),
            name_highlights: match_ranges(&user.name, &self.filter.query),
            username_highlights: match_ranges(&user.username, &self.filter.query),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" User Directory ({}/{}) ", self.deck.cards().len(), self.users.len()),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        match self.input_mode {
            InputMode::Search => Some(SearchBarInfo {
                query: self.filter.query.clone(),
            }),
            InputMode::Normal => None,
        }
    }

    fn compute_selectors(&self) -> SelectorBarInfo {
        SelectorBarInfo {
            city: self.filter.city.clone().unwrap_or_else(|| ALL_CITIES_LABEL.to_string()),
            city_active: self.filter.city.is_some(),
            city_options: self.deck.city_options().len(),
            company: self.filter.company.clone().unwrap_or_else(|| ALL_COMPANIES_LABEL.to_string()),
            company_active: self.filter.company.is_some(),
            company_options: self.deck.company_options().len(),
        }
    }

    fn compute_status(&self) -> Option<StatusLine> {
        if self.deck.is_visible(Indicator::Error) {
            Some(StatusLine {
                kind: Indicator::Error,
                message: "Failed to load users.".to_string(),
            })
        } else if self.deck.is_visible(Indicator::Loading) {
            Some(StatusLine {
                kind: Indicator::Loading,
                message: "Loading users...".to_string(),
            })
        } else {
            None
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search => "Type to filter  Backspace: delete  Enter: done  ESC: clear search",
            InputMode::Normal => {
                "j/k: move  Enter/Space: details  /: search  c/C: city  o/O: company  t: theme  q: quit"
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    /// Rows left for cards after the chrome of the current mode.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(NORMAL_CHROME_ROWS),
            InputMode::Search => total_rows.saturating_sub(SEARCH_CHROME_ROWS),
        }
    }
}

/// Picks the run of cards to paint so the card under the cursor is visible.
///
/// Cards above the cursor are added while they fit, then cards below it. The
/// cursor's own card is always included, even when it is taller than
/// `available`.
///
/// # Example
///
/// ```rust
/// use roster::app::state::card_window;
///
/// // Three 7-row cards in a 16-row area: two fit.
/// assert_eq!(card_window(&[7, 7, 7], 0, 16), 0..2);
/// assert_eq!(card_window(&[7, 7, 7], 2, 16), 1..3);
/// ```
#[must_use]
pub fn card_window(heights: &[usize], cursor: usize, available: usize) -> Range<usize> {
    if heights.is_empty() {
        return 0..0;
    }

    let cursor = cursor.min(heights.len() - 1);
    let mut start = cursor;
    let mut used = heights[cursor];

    while start > 0 && used + heights[start - 1] <= available {
        start -= 1;
        used += heights[start];
    }

    let mut end = cursor + 1;
    while end < heights.len() && used + heights[end] <= available {
        used += heights[end];
        end += 1;
    }

    start..end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, Company};
    use rstest::rstest;

    fn user(name: &str, username: &str, city: &str, company: &str) -> UserRecord {
        UserRecord {
            id: None,
            name: name.to_string(),
            username: username.to_string(),
            email: format!("{}@example.org", username.to_lowercase()),
            address: Address { city: city.to_string() },
            company: Company { name: company.to_string() },
            phone: "555-0100".to_string(),
            website: "example.org".to_string(),
        }
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new(Appearance::default());
        let users = vec![
            user("Leanne Graham", "Bret", "Gwenborough", "Romaguera-Crona"),
            user("Ervin Howell", "Antonette", "Wisokyburgh", "Deckow-Crist"),
            user("Clementine Bauch", "Samantha", "McKenziehaven", "Romaguera-Jacobson"),
        ];
        assert!(state.settle_load(Ok(users)));
        state
    }

    #[rstest]
    #[case::fits_from_top(&[7, 7, 7], 0, 21, 0..3)]
    #[case::scrolls_to_cursor(&[7, 7, 7, 7], 3, 14, 2..4)]
    #[case::expanded_cursor(&[7, 9, 7], 1, 16, 0..2)]
    #[case::cursor_taller_than_area(&[7, 9, 7], 1, 5, 1..2)]
    #[case::empty(&[], 0, 20, 0..0)]
    fn window_contains_cursor(
        #[case] heights: &[usize],
        #[case] cursor: usize,
        #[case] available: usize,
        #[case] expected: Range<usize>,
    ) {
        assert_eq!(card_window(heights, cursor, available), expected);
    }

    #[test]
    fn late_outcome_is_ignored() {
        let mut state = loaded_state();

        assert!(!state.settle_load(Ok(vec![])));

        assert_eq!(state.users.len(), 3);
        assert_eq!(state.deck.cards().len(), 3);
        assert_eq!(state.deck.city_options().len(), 3);
        assert_eq!(state.deck.company_options().len(), 3);
    }

    #[test]
    fn city_cycle_walks_options_then_back_to_all() {
        let mut state = loaded_state();

        state.cycle_city(Step::Next);
        assert_eq!(state.filter.city.as_deref(), Some("Gwenborough"));
        assert_eq!(state.deck.cards().len(), 1);

        state.cycle_city(Step::Previous);
        assert_eq!(state.filter.city, None);
        assert_eq!(state.deck.cards().len(), 3);

        state.cycle_city(Step::Previous);
        assert_eq!(state.filter.city.as_deref(), Some("McKenziehaven"));
    }

    #[test]
    fn viewmodel_marks_cursor_and_highlights_query() {
        let mut state = loaded_state();
        state.filter.query = "an".to_string();
        state.apply_filters();
        state.deck.move_cursor_down();

        let vm = state.compute_viewmodel(40);

        assert_eq!(vm.cards.len(), 3);
        assert!(!vm.cards[0].is_selected);
        assert!(vm.cards[1].is_selected);
        assert_eq!(vm.cards[0].name_highlights, vec![(2, 4)]);
        assert_eq!(vm.cards[1].username_highlights, vec![(0, 2)]);
        assert_eq!(vm.cards[2].username_highlights, vec![(3, 5)]);
        assert_eq!(vm.header.title, " User Directory (3/3) ");
        assert!(vm.status.is_none());
    }

    #[test]
    fn viewmodel_shows_error_over_loading() {
        let mut state = AppState::new(Appearance::default());
        state.deck.set_indicator(Indicator::Error, true);

        let vm = state.compute_viewmodel(24);

        assert_eq!(vm.status.map(|s| s.kind), Some(Indicator::Error));
    }

    #[test]
    fn selector_labels_default_to_all() {
        let state = loaded_state();

        let vm = state.compute_viewmodel(24);

        assert_eq!(vm.selectors.city, ALL_CITIES_LABEL);
        assert_eq!(vm.selectors.company, ALL_COMPANIES_LABEL);
        assert_eq!(vm.selectors.city_options, 3);
        assert!(!vm.selectors.city_active);
    }
}
