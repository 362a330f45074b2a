//! Plain text report output
//!
//! Each non-empty section prints its header and one entry per line. Headers
//! after the first section carry a leading blank line, printed whenever the
//! header itself is, even if earlier sections were empty.

use std::io::{self, Write};
use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::report::{Report, Section};

use super::config::OutputConfig;

/// Write every non-empty section of `report`.
pub fn write_report<W: WriteColor>(out: &mut W, report: &Report) -> io::Result<()> {
    for section in Section::ALL {
        let entries = report.section(section);
        if entries.is_empty() {
            continue;
        }
        if section != Section::Builtin {
            writeln!(out)?;
        }
        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "{}", section.header())?;
        out.reset()?;
        writeln!(out)?;
        for entry in entries {
            writeln!(out, "{}", entry)?;
        }
    }
    Ok(())
}

/// Print the report to stdout.
///
/// `config.use_color` is taken as already resolved against the terminal and
/// environment.
pub fn print_report(report: &Report, config: &OutputConfig) -> io::Result<()> {
    let choice = if config.use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_report(&mut stdout, report)?;
    stdout.flush()
}
