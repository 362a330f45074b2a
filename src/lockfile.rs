//! Checksum lockfile (`go.sum`) reading
//!
//! Each line is `<module> <version> <hash>`. Only the module path is kept;
//! the `/go.mod` hash lines repeat the same path and collapse in the set.

use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

use crate::error::{AuditError, Result};
use crate::file_utils::{numbered_lines, open_lines};

const FIELDS_PER_LINE: usize = 3;

/// Read the lockfile at `path` into `locked`.
pub fn read_lockfile(path: &Path, locked: &mut HashSet<String>) -> Result<()> {
    parse_lockfile(path, open_lines(path)?, locked)
}

/// Read lockfile content into `locked`.
///
/// Every line must hold exactly three whitespace-separated fields; the first
/// malformed line fails the whole read. Entries inserted before the failure
/// stay in `locked`, but callers abort on error anyway.
pub fn parse_lockfile<R: BufRead>(
    path: &Path,
    reader: R,
    locked: &mut HashSet<String>,
) -> Result<()> {
    for line in numbered_lines(reader) {
        let (line_number, text) = line.map_err(|e| AuditError::io(path, e))?;
        let fields: Vec<&str> = text.split_ascii_whitespace().collect();
        if fields.len() != FIELDS_PER_LINE {
            return Err(AuditError::BadLockLine {
                path: path.to_path_buf(),
                line_number,
                line: text,
            });
        }
        locked.insert(fields[0].to_string());
    }
    Ok(())
}
