//! Event handling and state transition logic.
//!
//! The plugin shim maps Zellij events to [`Event`]s and feeds them to
//! [`handle_event`], which mutates [`AppState`] and returns whether the pane
//! needs a repaint plus the [`Action`]s to run.
//!
//! # Event Types
//!
//! - **Cards**: `CursorDown`, `CursorUp`, `ToggleCard`
//! - **Search**: `SearchMode`, `Char`, `Backspace`, `ConfirmSearch`, `ExitSearch`
//! - **Selectors**: `NextCity`, `PreviousCity`, `NextCompany`, `PreviousCompany`
//! - **Appearance**: `ToggleTheme`
//! - **Load**: `PermissionsGranted`, `PermissionsDenied`, `DirectoryResponse`,
//!   `WorkerResponse`
//!
//! # Example
//!
//! ```rust
//! use roster::app::{handle_event, Action, AppState, Event};
//! use roster::ui::Appearance;
//!
//! let mut state = AppState::new(Appearance::default());
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted)?;
//! assert!(matches!(actions[0], Action::FetchDirectory { .. }));
//! # Ok::<(), roster::domain::RosterError>(())
//! ```

use super::modes::InputMode;
use crate::app::{Action, AppState};
use crate::directory::{Step, USERS_ENDPOINT};
use crate::domain::{Result, RosterError};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, host callbacks, or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the card cursor down (wraps to top).
    CursorDown,
    /// Moves the card cursor up (wraps to bottom).
    CursorUp,
    /// Activates the toggle of the card under the cursor.
    ToggleCard,

    /// Gives the search bar focus.
    SearchMode,
    /// Appends a character to the query.
    Char(char),
    /// Removes the last character of the query.
    Backspace,
    /// Leaves search mode keeping the query.
    ConfirmSearch,
    /// Leaves search mode and clears the query.
    ExitSearch,

    /// Selects the next city option.
    NextCity,
    /// Selects the previous city option.
    PreviousCity,
    /// Selects the next company option.
    NextCompany,
    /// Selects the previous company option.
    PreviousCompany,

    /// Flips dark mode.
    ToggleTheme,
    /// Hides the plugin pane.
    CloseFocus,

    /// The `WebAccess` permission was granted.
    PermissionsGranted,
    /// The `WebAccess` permission was denied.
    PermissionsDenied,

    /// Zellij delivered the directory response.
    DirectoryResponse {
        /// HTTP status.
        status: u16,
        /// Response body, decoded as UTF-8.
        body: String,
    },

    /// Wraps a response from the background worker thread.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the pane must be repainted.
///
/// # Errors
///
/// Currently infallible; the `Result` is kept so event handling can grow
/// fallible steps without changing the plugin shim.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind(event)).entered();

    match event {
        Event::CursorDown => {
            state.deck.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            state.deck.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::ToggleCard => Ok((state.deck.toggle_at_cursor().is_some(), vec![])),

        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            state.filter.query.push(*c);
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if state.filter.query.pop().is_none() {
                return Ok((false, vec![]));
            }
            state.apply_filters();
            Ok((true, vec![]))
        }
        Event::ConfirmSearch => {
            tracing::debug!(query = %state.filter.query, "leaving search mode");
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.filter.query, "clearing search");
            state.input_mode = InputMode::Normal;
            if !state.filter.query.is_empty() {
                state.filter.query.clear();
                state.apply_filters();
            }
            Ok((true, vec![]))
        }

        Event::NextCity => {
            state.cycle_city(Step::Next);
            Ok((true, vec![]))
        }
        Event::PreviousCity => {
            state.cycle_city(Step::Previous);
            Ok((true, vec![]))
        }
        Event::NextCompany => {
            state.cycle_company(Step::Next);
            Ok((true, vec![]))
        }
        Event::PreviousCompany => {
            state.cycle_company(Step::Previous);
            Ok((true, vec![]))
        }

        Event::ToggleTheme => {
            state.appearance.toggle();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),

        Event::PermissionsGranted => {
            if state.request_issued || state.load_phase.is_settled() {
                tracing::debug!("directory request already issued");
                return Ok((false, vec![]));
            }
            state.request_issued = true;
            tracing::info!(url = USERS_ENDPOINT, "requesting directory");
            Ok((false, vec![Action::FetchDirectory { url: USERS_ENDPOINT.to_string() }]))
        }
        Event::PermissionsDenied => {
            let applied = state.settle_load(Err(RosterError::Load("web access permission denied".to_string())));
            Ok((applied, vec![]))
        }

        Event::DirectoryResponse { status, body } => {
            if state.load_phase.is_settled() {
                tracing::debug!(status = status, "ignoring directory response after settle");
                return Ok((false, vec![]));
            }
            tracing::debug!(status = status, body_len = body.len(), "directory response received");
            Ok((false, vec![Action::PostToWorker(WorkerMessage::parse_directory(*status, body.clone()))]))
        }
        Event::WorkerResponse(response) => {
            let applied = state.settle_load(response.clone().into_outcome());
            Ok((applied, vec![]))
        }
    }
}

/// Event name for span fields, without dumping response bodies.
struct EventKind<'a>(&'a Event);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::DirectoryResponse { status, body } => {
                write!(f, "DirectoryResponse {{ status: {status}, body_len: {} }}", body.len())
            }
            Event::WorkerResponse(WorkerResponse::DirectoryLoaded { users }) => {
                write!(f, "WorkerResponse(DirectoryLoaded {{ users: {} }})", users.len())
            }
            other => write!(f, "{other:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::LoadPhase;
    use crate::domain::{Address, Company, UserRecord};
    use crate::ui::{Appearance, Indicator};

    fn user(name: &str, username: &str) -> UserRecord {
        UserRecord {
            id: None,
            name: name.to_string(),
            username: username.to_string(),
            email: "e@example.org".to_string(),
            address: Address { city: "Gwenborough".to_string() },
            company: Company { name: "Romaguera-Crona".to_string() },
            phone: "555".to_string(),
            website: "example.org".to_string(),
        }
    }

    fn loaded(users: Vec<UserRecord>) -> AppState {
        let mut state = AppState::new(Appearance::default());
        handle_event(&mut state, &Event::WorkerResponse(WorkerResponse::DirectoryLoaded { users })).unwrap();
        state
    }

    #[test]
    fn second_grant_does_not_refetch() {
        let mut state = AppState::new(Appearance::default());

        let (_, first) = handle_event(&mut state, &Event::PermissionsGranted).unwrap();
        let (_, second) = handle_event(&mut state, &Event::PermissionsGranted).unwrap();

        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
    }

    #[test]
    fn response_is_handed_to_worker() {
        let mut state = AppState::new(Appearance::default());

        let (render, actions) = handle_event(
            &mut state,
            &Event::DirectoryResponse { status: 200, body: "[]".to_string() },
        )
        .unwrap();

        assert!(!render);
        assert!(matches!(
            &actions[..],
            [Action::PostToWorker(WorkerMessage::ParseDirectory { status: 200, .. })]
        ));
    }

    #[test]
    fn response_after_settle_is_dropped() {
        let mut state = loaded(vec![user("Leanne Graham", "Bret")]);

        let (_, actions) = handle_event(
            &mut state,
            &Event::DirectoryResponse { status: 200, body: "[]".to_string() },
        )
        .unwrap();

        assert!(actions.is_empty());
    }

    #[test]
    fn denied_permission_is_a_load_failure() {
        let mut state = AppState::new(Appearance::default());

        let (render, _) = handle_event(&mut state, &Event::PermissionsDenied).unwrap();

        assert!(render);
        assert_eq!(state.load_phase, LoadPhase::Failed);
        assert!(state.deck.is_visible(Indicator::Error));
        assert!(!state.deck.is_visible(Indicator::Loading));
    }

    #[test]
    fn typing_refilters_every_keystroke() {
        let mut state = loaded(vec![user("Leanne Graham", "Bret"), user("Ervin Howell", "Antonette")]);
        handle_event(&mut state, &Event::SearchMode).unwrap();

        handle_event(&mut state, &Event::Char('n')).unwrap();
        assert_eq!(state.deck.cards().len(), 2);

        handle_event(&mut state, &Event::Char('e')).unwrap();
        assert_eq!(state.deck.cards().len(), 2);

        handle_event(&mut state, &Event::Char('t')).unwrap();
        assert_eq!(state.deck.cards().len(), 1);
        assert_eq!(state.deck.cards()[0].user.username, "Antonette");

        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.deck.cards().len(), 2);
    }

    #[test]
    fn confirm_keeps_query_and_escape_clears_it() {
        let mut state = loaded(vec![user("Leanne Graham", "Bret"), user("Ervin Howell", "Antonette")]);
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('b')).unwrap();

        handle_event(&mut state, &Event::ConfirmSearch).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.filter.query, "b");
        assert_eq!(state.deck.cards().len(), 1);

        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::ExitSearch).unwrap();
        assert_eq!(state.filter.query, "");
        assert_eq!(state.deck.cards().len(), 2);
    }

    #[test]
    fn backspace_on_empty_query_needs_no_repaint() {
        let mut state = loaded(vec![user("Leanne Graham", "Bret")]);
        let passes = state.deck.render_passes();

        let (render, _) = handle_event(&mut state, &Event::Backspace).unwrap();

        assert!(!render);
        assert_eq!(state.deck.render_passes(), passes);
    }

    #[test]
    fn toggle_on_empty_deck_needs_no_repaint() {
        let mut state = loaded(vec![]);

        let (render, _) = handle_event(&mut state, &Event::ToggleCard).unwrap();

        assert!(!render);
    }

    #[test]
    fn close_emits_close_action() {
        let mut state = AppState::new(Appearance::default());

        let (_, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();

        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn event_kind_hides_bodies() {
        let event = Event::DirectoryResponse { status: 200, body: "x".repeat(4096) };

        let rendered = format!("{:?}", EventKind(&event));

        assert_eq!(rendered, "DirectoryResponse { status: 200, body_len: 4096 }");
    }
}
