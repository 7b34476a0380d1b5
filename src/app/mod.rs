//! Application layer coordinating state, events, and actions.
//!
//! ```text
//! Key / host event → Event → handle_event → AppState mutation → Actions
//!                               ↑                                  ↓
//!                               └──────── WorkerResponse ──────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic
//! - [`keys`]: Key bindings per input mode
//! - [`modes`]: Input mode
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod keys;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use state::AppState;
