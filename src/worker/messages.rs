//! Plugin ⇄ worker message protocol.
//!
//! The plugin hands the raw directory response to the worker, which parses it
//! off the render thread and answers with either the records or the reason the
//! load failed. Every request carries the caller's trace context so the
//! worker's spans join the plugin's trace.

use crate::domain::{Result, RosterError, UserRecord};
use serde::{Deserialize, Serialize};

/// Distributed tracing context for cross-thread span propagation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Parent span ID for linking spans across threads.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the trace and span IDs of the current tracing span.
    ///
    /// Returns `None` when no OpenTelemetry layer is installed or the span
    /// context is invalid.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Messages sent from the plugin to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Parse the body of the directory response.
    ParseDirectory {
        /// HTTP status reported by Zellij.
        status: u16,

        /// Response body, decoded as UTF-8.
        body: String,

        /// Trace context for linking spans across threads.
        #[serde(skip_serializing_if = "Option::is_none", default)]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Creates a `ParseDirectory` message carrying the current trace context.
    ///
    /// # Example
    ///
    /// ```rust
    /// use roster::worker::WorkerMessage;
    ///
    /// let message = WorkerMessage::parse_directory(200, "[]".to_string());
    /// assert!(matches!(message, WorkerMessage::ParseDirectory { status: 200, .. }));
    /// ```
    #[must_use]
    pub fn parse_directory(status: u16, body: String) -> Self {
        Self::ParseDirectory {
            status,
            body,
            trace_context: TraceContext::from_current(),
        }
    }

    /// Trace context attached to the message, if any.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::ParseDirectory { trace_context, .. } => trace_context.as_ref(),
        }
    }

    /// Serializes the message for `post_message_to`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Worker`] if the message cannot be serialized.
    pub fn to_payload(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| RosterError::Worker(format!("failed to serialize worker message: {e}")))
    }
}

/// Responses sent from the worker back to the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The response held a valid directory.
    DirectoryLoaded {
        /// Records in endpoint order.
        users: Vec<UserRecord>,
    },

    /// The response was a failure or could not be parsed.
    DirectoryFailed {
        /// Human-readable cause, for logs only.
        message: String,
    },
}

impl WorkerResponse {
    /// Converts the response into the load outcome it reports.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Load`] for `DirectoryFailed`.
    pub fn into_outcome(self) -> Result<Vec<UserRecord>> {
        match self {
            Self::DirectoryLoaded { users } => Ok(users),
            Self::DirectoryFailed { message } => Err(RosterError::Load(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_without_trace_context_omits_the_field() {
        let message = WorkerMessage::ParseDirectory {
            status: 200,
            body: "[]".to_string(),
            trace_context: None,
        };

        let payload = message.to_payload().unwrap();

        assert!(!payload.contains("trace_context"));
        let back: WorkerMessage = serde_json::from_str(&payload).unwrap();
        assert_eq!(back, message);
    }

    #[test]
    fn failure_response_becomes_load_error() {
        let response = WorkerResponse::DirectoryFailed {
            message: "Directory request failed with status 500".to_string(),
        };

        let err = response.into_outcome().unwrap_err();

        assert!(matches!(err, RosterError::Load(_)));
        assert!(err.is_load_failure());
    }
}
