//! Background worker that turns the raw directory response into records.
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::{DirectoryWorker, WORKER_NAME};
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
