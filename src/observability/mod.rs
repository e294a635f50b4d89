//! OpenTelemetry-based observability with file-based span export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON Lines
//! ```
//!
//! Spans land in `~/.local/share/zellij/bookgrid/bookgrid-spans.jsonl`,
//! rotated at 10 MB with 3 backups kept. The level comes from the
//! `trace_level` plugin option and defaults to `info`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`tracer`]: Tracer provider with the file exporter
//! - [`span_formatter`]: Span → JSON record
//! - [`file_writer`]: Rotating file writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::init_tracing;
