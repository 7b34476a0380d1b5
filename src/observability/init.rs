//! Tracing subscriber setup.

use super::tracer;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name of the trace log inside the plugin data directory.
pub const TRACE_FILE_NAME: &str = "roster-trace.jsonl";

/// Installs the global subscriber: `EnvFilter` plus the OpenTelemetry layer.
///
/// `config.trace_level` is an `EnvFilter` directive (`"debug"`,
/// `"roster=trace"`, ...). An invalid directive falls back to `info`. Does
/// nothing if the data directory cannot be created. Only the first call per
/// process takes effect.
pub fn init_tracing(config: &Config) {
    let data_dir = paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let resource = Resource::new(vec![
        opentelemetry::KeyValue::new("service.name", "Roster"),
        opentelemetry::KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE_NAME), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer("Roster"));

    let _ = tracing_subscriber::registry().with(filter).with(otel_layer).try_init();
}
