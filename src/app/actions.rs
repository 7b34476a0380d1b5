//! Side effects requested by the event handler.
//!
//! The handler never calls Zellij itself. It returns `Action`s and the plugin
//! shim executes them in order.

use crate::worker::WorkerMessage;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues the one directory `GET`.
    FetchDirectory {
        /// Endpoint to request.
        url: String,
    },

    /// Posts a message to the background worker thread.
    PostToWorker(WorkerMessage),
}
