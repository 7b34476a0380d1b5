//! One-shot loading of the user directory.
//!
//! The request itself is issued by the plugin shim through Zellij's
//! `web_request` host call. This module owns what happens around it: the
//! endpoint constants, turning a raw response into records, and settling the
//! single load outcome onto a [`View`].
//!
//! # Flow
//!
//! ```text
//! web_request(GET) ─▶ WebRequestResult ─▶ worker: parse_response ─▶ settle
//!                                                                   │
//!            Ok:  store ─▶ populate filters ─▶ render all ─▶ hide loading
//!            Err: show error ─────────────────────────────▶ hide loading
//! ```

use crate::directory::FilterIndex;
use crate::domain::{Result, RosterError, UserRecord};
use crate::ui::view::{Indicator, View};

/// Fixed directory endpoint.
pub const USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Context key attached to the web request so its result can be recognized.
pub const REQUEST_CONTEXT_KEY: &str = "roster_request";

/// Context value attached under [`REQUEST_CONTEXT_KEY`].
pub const REQUEST_CONTEXT_VALUE: &str = "users";

/// Progress of the single directory load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Request not answered yet; the loading indicator is visible.
    #[default]
    Pending,
    /// Records arrived and were rendered.
    Loaded,
    /// The load failed; the error indicator is visible.
    Failed,
}

impl LoadPhase {
    /// Returns `true` once the load has a final outcome.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// Returns `true` for a 2xx status.
#[must_use]
pub const fn is_ok_status(status: u16) -> bool {
    status >= 200 && status < 300
}

/// Turns a raw endpoint response into records.
///
/// # Errors
///
/// - [`RosterError::Status`] if `status` is not 2xx (the body is not read)
/// - [`RosterError::Parse`] if the body is not a JSON array of user records
///
/// # Example
///
/// ```rust
/// use roster::directory::parse_response;
///
/// assert!(parse_response(200, b"[]").unwrap().is_empty());
/// assert!(parse_response(404, b"[]").is_err());
/// assert!(parse_response(200, b"{}").is_err());
/// ```
pub fn parse_response(status: u16, body: &[u8]) -> Result<Vec<UserRecord>> {
    if !is_ok_status(status) {
        return Err(RosterError::Status(status));
    }

    let users: Vec<UserRecord> = serde_json::from_slice(body)?;
    tracing::debug!(user_count = users.len(), body_len = body.len(), "directory response parsed");
    Ok(users)
}

/// Applies the load outcome to `view` and returns the collection to keep.
///
/// On success the filter selectors are populated and every record is rendered
/// before the loading indicator is hidden. On failure the error indicator is
/// shown and an empty collection is returned. The loading indicator is hidden
/// in both cases, as the last step.
pub fn settle<V: View + ?Sized>(view: &mut V, outcome: Result<Vec<UserRecord>>) -> (LoadPhase, Vec<UserRecord>) {
    let settled = match outcome {
        Ok(users) => {
            tracing::info!(user_count = users.len(), "directory loaded");
            view.populate_filters(&FilterIndex::build(&users));
            let all: Vec<&UserRecord> = users.iter().collect();
            view.render_cards(&all);
            (LoadPhase::Loaded, users)
        }
        Err(e) => {
            tracing::warn!(error = %e, load_failure = e.is_load_failure(), "directory load failed");
            view.set_indicator(Indicator::Error, true);
            (LoadPhase::Failed, Vec::new())
        }
    };

    view.set_indicator(Indicator::Loading, false);
    settled
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every call so ordering can be asserted.
    #[derive(Default)]
    struct RecordingView {
        calls: Vec<String>,
    }

    impl View for RecordingView {
        fn render_cards(&mut self, records: &[&UserRecord]) {
            self.calls.push(format!("render:{}", records.len()));
        }

        fn set_indicator(&mut self, kind: Indicator, visible: bool) {
            self.calls.push(format!("{kind:?}:{visible}"));
        }

        fn populate_filters(&mut self, index: &FilterIndex) {
            self.calls.push(format!("filters:{}/{}", index.cities.len(), index.companies.len()));
        }
    }

    const TWO_USERS: &str = r#"[
        {"id": 1, "name": "Leanne Graham", "username": "Bret", "email": "Sincere@april.biz",
         "address": {"city": "Gwenborough"}, "company": {"name": "Romaguera-Crona"},
         "phone": "1-770-736-8031 x56442", "website": "hildegard.org"},
        {"id": 2, "name": "Ervin Howell", "username": "Antonette", "email": "Shanna@melissa.tv",
         "address": {"city": "Wisokyburgh"}, "company": {"name": "Deckow-Crist"},
         "phone": "010-692-6593 x09125", "website": "anastasia.net"}
    ]"#;

    #[test]
    fn parses_array_in_order() {
        let users = parse_response(200, TWO_USERS.as_bytes()).unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "Bret");
        assert_eq!(users[1].username, "Antonette");
    }

    #[test]
    fn non_ok_status_is_a_failure_even_with_valid_body() {
        let err = parse_response(500, TWO_USERS.as_bytes()).unwrap_err();

        assert!(matches!(err, RosterError::Status(500)));
    }

    #[test]
    fn non_array_body_is_a_parse_failure() {
        let err = parse_response(200, br#"{"users": []}"#).unwrap_err();

        assert!(matches!(err, RosterError::Parse(_)));
        assert!(err.is_load_failure());
    }

    #[test]
    fn success_populates_renders_then_hides_loading() {
        let mut view = RecordingView::default();
        let users = parse_response(200, TWO_USERS.as_bytes()).unwrap();

        let (phase, kept) = settle(&mut view, Ok(users));

        assert_eq!(phase, LoadPhase::Loaded);
        assert_eq!(kept.len(), 2);
        assert_eq!(view.calls, vec!["filters:2/2", "render:2", "Loading:false"]);
    }

    #[test]
    fn failure_shows_error_then_hides_loading() {
        let mut view = RecordingView::default();

        let (phase, kept) = settle(&mut view, Err(RosterError::Status(503)));

        assert_eq!(phase, LoadPhase::Failed);
        assert!(kept.is_empty());
        assert_eq!(view.calls, vec!["Error:true", "Loading:false"]);
    }

    #[test]
    fn ok_status_range() {
        assert!(is_ok_status(200));
        assert!(is_ok_status(204));
        assert!(!is_ok_status(199));
        assert!(!is_ok_status(301));
        assert!(!is_ok_status(400));
    }
}
