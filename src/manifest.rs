//! Module manifest (`go.mod`) reading
//!
//! Only the `module` directive matters: its path is the namespace under which
//! the project's own packages live.

use std::io::BufRead;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AuditError, Result};
use crate::file_utils::{numbered_lines, open_lines};

static MODULE_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^module(?:\s|$)").expect("MODULE_KEYWORD regex is invalid"));

// Accepts any whitespace run after the keyword, an optionally quoted path, and
// `~` in the path, all of which the Go tool allows in a `module` directive.
static MODULE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^module\s+"?([-./~0-9A-Za-z_]+)"?"#).expect("MODULE_PATH regex is invalid")
});

/// Read the namespace from the manifest at `path`.
pub fn read_manifest(path: &Path) -> Result<String> {
    parse_manifest(path, open_lines(path)?)
}

/// Read the namespace from manifest content.
///
/// The first `module` line wins and the rest of the input is not read.
/// `path` is only used to label errors.
pub fn parse_manifest<R: BufRead>(path: &Path, reader: R) -> Result<String> {
    for line in numbered_lines(reader) {
        let (_, text) = line.map_err(|e| AuditError::io(path, e))?;
        if !MODULE_KEYWORD.is_match(&text) {
            continue;
        }
        return match MODULE_PATH.captures(&text).and_then(|caps| caps.get(1)) {
            Some(name) => Ok(name.as_str().to_string()),
            None => Err(AuditError::MalformedModule {
                path: path.to_path_buf(),
                line: text,
            }),
        };
    }
    Err(AuditError::ModuleNotFound {
        path: path.to_path_buf(),
    })
}
