//! JSON output formatting

use std::io::{self, Write};

use crate::report::Report;

/// Write the report as pretty-printed JSON followed by a newline.
pub fn write_json<W: Write>(mut writer: W, report: &Report) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut writer, report).map_err(io::Error::other)?;
    writeln!(writer)
}

/// Print the report as pretty-printed JSON to stdout.
pub fn print_json(report: &Report) -> io::Result<()> {
    let stdout = io::stdout();
    write_json(stdout.lock(), report)
}
