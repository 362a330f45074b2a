//! File classification for the walk
//!
//! Decides what, if anything, the auditor does with a file: read it as the
//! module manifest, read it as the checksum lockfile, scan it as Go source,
//! or leave it alone.

use std::ffi::OsStr;
use std::path::Path;

/// File name of the module manifest.
pub const MANIFEST_FILE: &str = "go.mod";

/// File name of the checksum lockfile.
pub const LOCKFILE_FILE: &str = "go.sum";

/// Name suffix of scanned source files.
pub const SOURCE_SUFFIX: &str = ".go";

/// What a file on disk is, as far as the audit is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    Manifest,
    Lockfile,
    Source,
    Other,
}

impl FileKind {
    /// Classify a file by its name.
    ///
    /// Names match exactly and the suffix test runs on the raw name bytes, so
    /// a file called just `.go` or one whose name is not UTF-8 is still
    /// source, while `GO.MOD` and `main.GO` are `Other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use depsift::file_kind::FileKind;
    ///
    /// assert_eq!(FileKind::from_file_name("go.mod"), FileKind::Manifest);
    /// assert_eq!(FileKind::from_file_name("go.sum"), FileKind::Lockfile);
    /// assert_eq!(FileKind::from_file_name("main.go"), FileKind::Source);
    /// assert_eq!(FileKind::from_file_name(".go"), FileKind::Source);
    /// assert_eq!(FileKind::from_file_name("README.md"), FileKind::Other);
    /// ```
    pub fn from_file_name(name: impl AsRef<OsStr>) -> Self {
        let name = name.as_ref();
        if name == MANIFEST_FILE {
            FileKind::Manifest
        } else if name == LOCKFILE_FILE {
            FileKind::Lockfile
        } else if name.as_encoded_bytes().ends_with(SOURCE_SUFFIX.as_bytes()) {
            FileKind::Source
        } else {
            FileKind::Other
        }
    }

    /// Classify a file by the last component of its path.
    pub fn from_path(path: &Path) -> Self {
        path.file_name().map_or(FileKind::Other, Self::from_file_name)
    }

    /// Short label used in log output.
    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Manifest => "manifest",
            FileKind::Lockfile => "lockfile",
            FileKind::Source => "source",
            FileKind::Other => "other",
        }
    }
}
