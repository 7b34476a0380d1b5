//! Tracing with OpenTelemetry span export to a file.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK tracer → FileSpanExporter → roster-trace.jsonl
//! ```
//!
//! The file lives in the plugin's `/data` directory, one JSON line per export
//! batch, capped in size with a single `.1` backup. The worker thread installs
//! the same pipeline on its first message and joins the plugin's traces
//! through the context carried in each worker message.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider and file exporter
//! - [`span_record`]: Serialized span shape
//! - [`file_writer`]: Size-capped trace file

mod file_writer;
mod init;
mod span_record;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
