//! OpenTelemetry-based observability with file-based trace export.
//!
//! Distributed tracing infrastructure for the plugin, using the OTLP JSON
//! format with file-based exporting so traces can be inspected offline from
//! inside the Zellij sandbox.
//!
//! # Architecture
//!
//! ```text
//! tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON file
//! ```
//!
//! Traces land in `zatalog-otlp.json` inside the plugin data directory, with
//! the file truncated once it exceeds its size cap. The trace level comes
//! from the `trace_level` plugin configuration option, defaulting to
//! `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - [`tracer`]: OpenTelemetry tracer provider with file export
//! - [`span_formatter`]: OTLP JSON span serialization
//! - [`file_writer`]: Size-capped trace file writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
