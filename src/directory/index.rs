//! Distinct option lists for the city and company selectors.

use crate::domain::UserRecord;
use std::collections::HashSet;

/// Selector options derived from the loaded collection.
///
/// Both lists keep first-occurrence order with duplicates removed. Empty values
/// are left out, since the default option already means "no filter". The index is
/// built once per session, right after a successful load, and never rebuilt
/// when filters change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterIndex {
    /// Distinct `address.city` values.
    pub cities: Vec<String>,
    /// Distinct `company.name` values.
    pub companies: Vec<String>,
}

impl FilterIndex {
    /// Builds the index from the full loaded collection.
    ///
    /// # Example
    ///
    /// ```rust
    /// use roster::directory::FilterIndex;
    ///
    /// let index = FilterIndex::build(&[]);
    /// assert!(index.cities.is_empty());
    /// assert!(index.companies.is_empty());
    /// ```
    #[must_use]
    pub fn build(users: &[UserRecord]) -> Self {
        let index = Self {
            cities: distinct(users.iter().map(UserRecord::city)),
            companies: distinct(users.iter().map(UserRecord::company_name)),
        };

        tracing::debug!(
            users = users.len(),
            cities = index.cities.len(),
            companies = index.companies.len(),
            "filter index built"
        );

        index
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| !value.is_empty() && seen.insert(*value))
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Address, Company};

    fn user(name: &str, city: &str, company: &str) -> UserRecord {
        UserRecord {
            id: None,
            name: name.to_string(),
            username: name.to_lowercase(),
            email: format!("{}@example.org", name.to_lowercase()),
            address: Address { city: city.to_string() },
            company: Company { name: company.to_string() },
            phone: "555".to_string(),
            website: "example.org".to_string(),
        }
    }

    #[test]
    fn keeps_first_occurrence_order() {
        let users = vec![
            user("A", "Lebsackbury", "Keebler LLC"),
            user("B", "Gwenborough", "Romaguera-Crona"),
            user("C", "Lebsackbury", "Deckow-Crist"),
            user("D", "Aliyaview", "Romaguera-Crona"),
        ];

        let index = FilterIndex::build(&users);

        assert_eq!(index.cities, vec!["Lebsackbury", "Gwenborough", "Aliyaview"]);
        assert_eq!(index.companies, vec!["Keebler LLC", "Romaguera-Crona", "Deckow-Crist"]);
    }

    #[test]
    fn values_differing_only_in_case_stay_distinct() {
        let users = vec![user("A", "Roscoeview", "x"), user("B", "roscoeview", "x")];

        let index = FilterIndex::build(&users);

        assert_eq!(index.cities, vec!["Roscoeview", "roscoeview"]);
        assert_eq!(index.companies, vec!["x"]);
    }

    #[test]
    fn empty_values_are_not_offered() {
        let users = vec![
            user("A", "", "Keebler LLC"),
            user("B", "Gwenborough", ""),
            user("C", "", ""),
        ];

        let index = FilterIndex::build(&users);

        assert_eq!(index.cities, vec!["Gwenborough"]);
        assert_eq!(index.companies, vec!["Keebler LLC"]);
    }
}
