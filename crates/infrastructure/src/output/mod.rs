//! Result sinks writing the two per-run reports.

pub mod file_sink;
pub mod stdout_sink;

pub use file_sink::FileResultSink;
pub use stdout_sink::StdoutResultSink;

use std::fmt::Display;

/// One record per line, newline-terminated.
pub(crate) fn render_lines<T: Display>(records: &[T]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.to_string());
        out.push('\n');
    }
    out
}
