//! Worker thread that parses the directory response.
//!
//! Parsing a few kilobytes of JSON is quick, but it still runs here so the
//! render thread only ever applies finished records. The worker keeps no
//! state between messages.

use crate::directory::parse_response;
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};

/// Name under which the worker is registered and answers.
pub const WORKER_NAME: &str = "roster";

/// Stateless parsing worker.
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct DirectoryWorker;

impl DirectoryWorker {
    /// Rebuilds the plugin's span context so worker spans nest under it.
    ///
    /// The returned guard must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;

        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());

        Some(opentelemetry::Context::current().with_remote_span_context(span_context).attach())
    }

    /// Processes a worker message and returns the response to post back.
    ///
    /// # Example
    ///
    /// ```rust
    /// use roster::worker::{DirectoryWorker, WorkerMessage, WorkerResponse};
    ///
    /// let mut worker = DirectoryWorker;
    /// let response = worker.handle_message(WorkerMessage::parse_directory(502, String::new()));
    /// assert!(matches!(response, WorkerResponse::DirectoryFailed { .. }));
    /// ```
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);

        match message {
            WorkerMessage::ParseDirectory { status, body, .. } => {
                let _span = tracing::debug_span!("worker_parse_directory", status = status, body_len = body.len()).entered();

                match parse_response(status, body.as_bytes()) {
                    Ok(users) => WorkerResponse::DirectoryLoaded { users },
                    Err(e) => {
                        tracing::debug!(error = %e, "directory response rejected");
                        WorkerResponse::DirectoryFailed { message: e.to_string() }
                    }
                }
            }
        }
    }
}

/// Tracks whether worker tracing has been initialized.
#[cfg(target_family = "wasm")]
static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

#[cfg(target_family = "wasm")]
impl zellij_tile::prelude::ZellijWorker<'_> for DirectoryWorker {
    fn on_message(&mut self, message: String, payload: String) {
        use std::sync::atomic::Ordering;
        use zellij_tile::prelude::PluginMessage;
        use zellij_tile::shim::post_message_to_plugin;

        if !WORKER_TRACING_INITIALIZED.swap(true, Ordering::Relaxed) {
            crate::observability::init_tracing(&crate::Config::default());
        }

        // A payload that cannot be read still has to settle the load.
        let response = match serde_json::from_str::<WorkerMessage>(&payload) {
            Ok(worker_message) => self.handle_message(worker_message),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                WorkerResponse::DirectoryFailed {
                    message: format!("unreadable worker message: {e}"),
                }
            }
        };

        match serde_json::to_string(&response) {
            Ok(payload) => post_message_to_plugin(PluginMessage {
                name: message,
                payload,
                worker_name: None,
            }),
            Err(e) => tracing::debug!(error = %e, "failed to serialize worker response"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RosterError;

    const ONE_USER: &str = r#"[{"id": 1, "name": "Leanne Graham", "username": "Bret",
        "email": "Sincere@april.biz", "address": {"street": "Kulas Light", "city": "Gwenborough"},
        "company": {"name": "Romaguera-Crona", "bs": "harness real-time e-markets"},
        "phone": "1-770-736-8031 x56442", "website": "hildegard.org"}]"#;

    #[test]
    fn parses_valid_body() {
        let mut worker = DirectoryWorker;

        let response = worker.handle_message(WorkerMessage::parse_directory(200, ONE_USER.to_string()));

        let WorkerResponse::DirectoryLoaded { users } = response else {
            panic!("expected DirectoryLoaded");
        };
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].city(), "Gwenborough");
    }

    #[test]
    fn malformed_body_reports_parse_failure() {
        let mut worker = DirectoryWorker;

        let response = worker.handle_message(WorkerMessage::parse_directory(200, "<html>".to_string()));

        let err = response.into_outcome().unwrap_err();
        let RosterError::Load(message) = err else {
            panic!("expected Load error");
        };
        assert!(message.starts_with("Directory response could not be parsed"));
    }

    #[test]
    fn survives_a_bogus_trace_context() {
        let mut worker = DirectoryWorker;
        let message = WorkerMessage::ParseDirectory {
            status: 200,
            body: "[]".to_string(),
            trace_context: Some(crate::worker::TraceContext {
                trace_id: "not-hex".to_string(),
                parent_span_id: "zz".to_string(),
            }),
        };

        let response = worker.handle_message(message);

        assert_eq!(response, WorkerResponse::DirectoryLoaded { users: vec![] });
    }
}
