//! Filter engine combining the search query with the two selectors.
//!
//! The engine always starts from the full loaded collection, never from the
//! currently displayed cards, so the three predicates compose conjunctively and
//! clearing one of them brings back every record the others allow.

use crate::domain::UserRecord;

/// Current search query and selector values.
///
/// `None` or an empty value for a selector means its default empty option is
/// chosen and the predicate is skipped. An empty query skips the text
/// predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text query, matched case-insensitively against name and username.
    pub query: String,
    /// Selected city, compared for exact equality.
    pub city: Option<String>,
    /// Selected company name, compared for exact equality.
    pub company: Option<String>,
}

impl FilterState {
    /// Returns `true` when no predicate is active.
    #[must_use]
    pub fn is_pass_through(&self) -> bool {
        self.query.is_empty()
            && self.city.as_deref().map_or(true, str::is_empty)
            && self.company.as_deref().map_or(true, str::is_empty)
    }

    /// Returns `true` if `user` passes every active predicate.
    ///
    /// `needle` is the lowercased query, computed once per filter pass.
    fn admits(&self, user: &UserRecord, needle: &str) -> bool {
        if !needle.is_empty() && !user.matches_lowercase_query(needle) {
            return false;
        }
        if let Some(city) = self.city.as_deref().filter(|city| !city.is_empty()) {
            if user.city() != city {
                return false;
            }
        }
        if let Some(company) = self.company.as_deref().filter(|company| !company.is_empty()) {
            if user.company_name() != company {
                return false;
            }
        }
        true
    }
}

/// Applies `filter` to the full collection, preserving collection order.
///
/// # Example
///
/// ```rust
/// use roster::directory::{apply_filters, FilterState};
///
/// let filter = FilterState { query: "bret".into(), ..FilterState::default() };
/// assert!(apply_filters(&[], &filter).is_empty());
/// ```
#[must_use]
pub fn apply_filters<'a>(users: &'a [UserRecord], filter: &FilterState) -> Vec<&'a UserRecord> {
    let _span = tracing::debug_span!(
        "apply_filters",
        total_users = users.len(),
        query_len = filter.query.len(),
        city = ?filter.city,
        company = ?filter.company
    )
    .entered();

    let needle = filter.query.to_lowercase();
    let visible: Vec<&UserRecord> = users.iter().filter(|user| filter.admits(user, &needle)).collect();

    tracing::debug!(visible_count = visible.len(), "filters applied");
    visible
}

/// Direction of a selector step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
}

/// Steps a selector through its options.
///
/// The default empty option sits before the first entry, so cycling forward
/// from the last option returns to `None` and backward from `None` wraps to
/// the last option. A `current` value missing from `options` restarts from
/// the default option.
///
/// # Example
///
/// ```rust
/// use roster::directory::{cycle_selection, Step};
///
/// let cities = vec!["Gwenborough".to_string(), "Wisokyburgh".to_string()];
/// let first = cycle_selection(&cities, None, Step::Next);
/// assert_eq!(first.as_deref(), Some("Gwenborough"));
/// assert_eq!(cycle_selection(&cities, Some("Wisokyburgh"), Step::Next), None);
/// ```
#[must_use]
pub fn cycle_selection(options: &[String], current: Option<&str>, step: Step) -> Option<String> {
    if options.is_empty() {
        return None;
    }

    let position = current.and_then(|value| options.iter().position(|option| option == value));

    let next = match (step, position) {
        (Step::Next, None) => Some(0),
        (Step::Next, Some(i)) if i + 1 < options.len() => Some(i + 1),
        (Step::Next, Some(_)) => None,
        (Step::Previous, None) => Some(options.len() - 1),
        (Step::Previous, Some(0)) => None,
        (Step::Previous, Some(i)) => Some(i - 1),
    };

    next.and_then(|i| options.get(i).cloned())
}
