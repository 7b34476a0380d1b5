//! User record domain model.
//!
//! This module defines [`UserRecord`], one entry of the remote user directory.
//! The shape follows the JSON served by the directory endpoint; fields the
//! viewer never displays (geo coordinates, company catch phrase, ...) are
//! ignored during deserialization.

use serde::{Deserialize, Serialize};

/// One directory entry as served by the remote endpoint.
///
/// Records are read-only once fetched. The viewer only ever borrows them for
/// filtering and copies display strings out of them for rendering.
///
/// # Fields
///
/// - `id`: Numeric identifier assigned by the endpoint, used for logging only
/// - `name`: Full display name
/// - `username`: Short handle, shown as `@username`
/// - `email`, `phone`, `website`: Contact details
/// - `address`: Nested address, only `city` is used
/// - `company`: Nested company, only `name` is used
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub company: Company,
    pub phone: String,
    pub website: String,
}

/// Postal address of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
}

/// Employer of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
}

impl UserRecord {
    /// City of the user's address.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.address.city
    }

    /// Name of the user's company.
    #[must_use]
    pub fn company_name(&self) -> &str {
        &self.company.name
    }

    /// Returns `true` if name or username contains `needle`.
    ///
    /// `needle` must already be lowercased; both fields are lowercased here
    /// before the substring check.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster::domain::UserRecord;
    ///
    /// let user: UserRecord = serde_json::from_str(r#"{
    ///     "name": "Leanne Graham", "username": "Bret", "email": "a@b.c",
    ///     "address": {"city": "Gwenborough"}, "company": {"name": "Romaguera-Crona"},
    ///     "phone": "1", "website": "x.org"
    /// }"#).unwrap();
    ///
    /// assert!(user.matches_lowercase_query("bret"));
    /// assert!(user.matches_lowercase_query("graham"));
    /// assert!(!user.matches_lowercase_query("antonette"));
    /// ```
    #[must_use]
    pub fn matches_lowercase_query(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.username.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_fields_outside_the_card() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {
                "street": "Kulas Light",
                "suite": "Apt. 556",
                "city": "Gwenborough",
                "zipcode": "92998-3874",
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": "hildegard.org",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        }"#;

        let user: UserRecord = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, Some(1));
        assert_eq!(user.city(), "Gwenborough");
        assert_eq!(user.company_name(), "Romaguera-Crona");
        assert_eq!(user.website, "hildegard.org");
    }

    #[test]
    fn missing_city_is_rejected() {
        let json = r#"{
            "name": "n", "username": "u", "email": "e",
            "address": {}, "company": {"name": "c"},
            "phone": "p", "website": "w"
        }"#;

        assert!(serde_json::from_str::<UserRecord>(json).is_err());
    }
}
