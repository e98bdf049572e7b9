//! OpenTelemetry tracing with file-based export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → FileSpanExporter → coinpane-otlp.json
//! ```
//!
//! Spans are written as OTLP JSON lines to
//! `~/.local/share/zellij/coinpane/coinpane-otlp.json`. The file is capped at
//! 5 MB and rolled into a single `.1` backup.
//!
//! The filter comes from the `trace_level` plugin option (any `EnvFilter`
//! directive) and defaults to `info`.

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, TRACE_FILE_NAME};
