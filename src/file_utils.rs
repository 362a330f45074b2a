//! Shared line-reading utilities for the manifest, lockfile and source readers
//!
//! Files are read one line at a time through a buffered reader. Lines are
//! split on `\n`, a trailing `\r` is dropped, and bytes are decoded lossily
//! so a stray non-UTF-8 byte never aborts a run.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{AuditError, Result};

/// Open a file for buffered line reading.
pub fn open_lines(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| AuditError::io(path, e))
}

/// Iterate over the lines of a reader, numbering them from 1.
pub fn numbered_lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<(usize, String)>> {
    reader
        .split(b'\n')
        .enumerate()
        .map(|(index, chunk)| chunk.map(|bytes| (index + 1, decode_line(bytes))))
}

fn decode_line(mut bytes: Vec<u8>) -> String {
    if bytes.last() == Some(&b'\r') {
        bytes.pop();
    }
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}
