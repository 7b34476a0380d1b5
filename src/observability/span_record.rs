//! JSON shape of exported spans.
//!
//! Each export batch becomes one [`BatchRecord`] serialized on a single line,
//! so the trace file can be read with `jq` or any JSON-lines tool.

use opentelemetry::trace::{SpanId, Status};
use opentelemetry::{KeyValue, Value};
use opentelemetry_sdk::export::trace::SpanData;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// One export batch.
#[derive(Debug, Serialize)]
pub struct BatchRecord {
    /// `service.name` of the exporting resource.
    pub service: String,
    /// Spans in the batch, in export order.
    pub spans: Vec<SpanRecord>,
}

/// One finished span.
#[derive(Debug, Serialize)]
pub struct SpanRecord {
    pub trace_id: String,
    pub span_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_span_id: Option<String>,
    pub name: String,
    pub start_unix_nano: u64,
    pub duration_micros: u64,
    pub attributes: BTreeMap<String, JsonValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EventRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A `tracing` event recorded inside a span.
#[derive(Debug, Serialize)]
pub struct EventRecord {
    pub name: String,
    pub unix_nano: u64,
    pub attributes: BTreeMap<String, JsonValue>,
}

impl From<&SpanData> for SpanRecord {
    fn from(span: &SpanData) -> Self {
        let parent_span_id =
            (span.parent_span_id != SpanId::INVALID).then(|| format!("{:016x}", span.parent_span_id));
        let duration_micros = span
            .end_time
            .duration_since(span.start_time)
            .map_or(0, |d| u64::try_from(d.as_micros()).unwrap_or(u64::MAX));
        let error = match &span.status {
            Status::Error { description } => Some(description.to_string()),
            Status::Unset | Status::Ok => None,
        };

        Self {
            trace_id: format!("{:032x}", span.span_context.trace_id()),
            span_id: format!("{:016x}", span.span_context.span_id()),
            parent_span_id,
            name: span.name.to_string(),
            start_unix_nano: unix_nanos(span.start_time),
            duration_micros,
            attributes: attribute_map(&span.attributes),
            events: span
                .events
                .iter()
                .map(|event| EventRecord {
                    name: event.name.to_string(),
                    unix_nano: unix_nanos(event.timestamp),
                    attributes: attribute_map(&event.attributes),
                })
                .collect(),
            error,
        }
    }
}

/// Nanoseconds since the Unix epoch, 0 for times before it.
pub fn unix_nanos(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
}

/// Attribute list as a key-sorted JSON object.
pub fn attribute_map(attributes: &[KeyValue]) -> BTreeMap<String, JsonValue> {
    attributes
        .iter()
        .map(|kv| (kv.key.to_string(), attribute_value(&kv.value)))
        .collect()
}

/// Converts an attribute value to plain JSON.
///
/// Arrays are rendered with their `Display` form.
pub fn attribute_value(value: &Value) -> JsonValue {
    match value {
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::I64(i) => JsonValue::from(*i),
        Value::F64(f) => JsonValue::from(*f),
        Value::String(s) => JsonValue::String(s.to_string()),
        Value::Array(_) => JsonValue::String(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn attributes_become_plain_json() {
        let attributes = vec![
            KeyValue::new("status", 200_i64),
            KeyValue::new("visible", true),
            KeyValue::new("query", "bret"),
        ];

        let map = attribute_map(&attributes);

        assert_eq!(map["status"], JsonValue::from(200));
        assert_eq!(map["visible"], JsonValue::Bool(true));
        assert_eq!(map["query"], JsonValue::String("bret".to_string()));
    }

    #[test]
    fn pre_epoch_time_is_zero() {
        let before = UNIX_EPOCH - Duration::from_secs(1);

        assert_eq!(unix_nanos(before), 0);
        assert_eq!(unix_nanos(UNIX_EPOCH + Duration::from_nanos(42)), 42);
    }

    #[test]
    fn batch_serializes_on_one_line() {
        let batch = BatchRecord {
            service: "Roster".to_string(),
            spans: vec![SpanRecord {
                trace_id: "0".repeat(32),
                span_id: "1".repeat(16),
                parent_span_id: None,
                name: "handle_event".to_string(),
                start_unix_nano: 1,
                duration_micros: 2,
                attributes: BTreeMap::new(),
                events: vec![],
                error: None,
            }],
        };

        let line = serde_json::to_string(&batch).unwrap();

        assert!(!line.contains('\n'));
        assert!(!line.contains("parent_span_id"));
        assert!(line.starts_with("{\"service\":\"Roster\""));
    }
}
