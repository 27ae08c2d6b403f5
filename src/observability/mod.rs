//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON lines
//! ```
//!
//! Spans land in `~/.local/share/zellij/quoteboard/quoteboard-otlp.json`,
//! rotated by size. The level comes from the `trace_level` plugin option.
//!
//! - `init`: subscriber setup
//! - `tracer`: provider and file exporter
//! - `span_formatter`: OTLP JSON encoding
//! - `file_writer`: rotating line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use file_writer::{FileWriter, RotationPolicy};
pub use init::init_tracing;
