//! OpenTelemetry tracer provider backed by the trace file.

use super::file_writer::RotatingFile;
use super::span_record::{BatchRecord, SpanRecord};
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Service name used when the resource does not carry one.
const FALLBACK_SERVICE: &str = "Roster";

/// Writes each export batch as one JSON line.
#[derive(Debug)]
struct FileSpanExporter {
    file: RotatingFile,
    service: String,
    is_shutdown: AtomicBool,
}

impl FileSpanExporter {
    fn new(path: PathBuf, resource: &Resource) -> Self {
        Self {
            file: RotatingFile::new(path),
            service: service_name(resource),
            is_shutdown: AtomicBool::new(false),
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        let record = BatchRecord {
            service: self.service.clone(),
            spans: batch.iter().map(SpanRecord::from).collect(),
        };
        let line = serde_json::to_string(&record).map_err(|e| TraceError::from(e.to_string()))?;
        self.file.write_line(&line).map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = if self.is_shutdown.load(Ordering::SeqCst) {
            Err(TraceError::from("exporter is shut down"))
        } else {
            self.write_batch(&batch)
        };
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.is_shutdown.store(true, Ordering::SeqCst);
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.service = service_name(resource);
    }
}

fn service_name(resource: &Resource) -> String {
    resource
        .get(opentelemetry::Key::from_static_str("service.name"))
        .map_or_else(|| FALLBACK_SERVICE.to_string(), |value| value.to_string())
}

/// Builds a tracer provider that exports every finished span to `path`.
///
/// Spans are exported synchronously as they end; the plugin has no async
/// runtime for a batch processor to run on.
pub fn create_tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(path, &resource);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::{Tracer, TracerProvider as _};
    use opentelemetry::KeyValue;

    #[test]
    fn finished_spans_land_in_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.jsonl");
        let resource = Resource::new(vec![KeyValue::new("service.name", "RosterTest")]);
        let provider = create_tracer_provider(path.clone(), resource);

        provider.tracer("test").in_span("directory_load", |_cx| {});
        let _ = provider.force_flush();

        let contents = std::fs::read_to_string(path).unwrap();
        let line = contents.lines().next().unwrap();
        let json: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(json["service"], "RosterTest");
        assert_eq!(json["spans"][0]["name"], "directory_load");
    }
}
