//! SourceWalker - visits the files an audit cares about

use std::path::Path;

use ignore::WalkBuilder;

use crate::error::{AuditError, Result};
use crate::file_kind::FileKind;

use super::config::WalkerConfig;
use super::utils::{compile_patterns, should_ignore_name};

/// Counts gathered during a walk, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub directories: usize,
    pub files: usize,
    /// Files handed to the visitor.
    pub visited: usize,
}

/// Sequential depth-first walker.
///
/// Entries are sorted by file name within each directory and symlinked
/// directories are not descended into.
pub struct SourceWalker {
    config: WalkerConfig,
}

impl SourceWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root`, calling `visit` for every file that is not `FileKind::Other`.
    ///
    /// The walk stops at the first walk error or visitor error.
    pub fn walk<F>(&self, root: &Path, mut visit: F) -> Result<WalkSummary>
    where
        F: FnMut(&Path, FileKind) -> Result<()>,
    {
        let patterns = compile_patterns(&self.config.ignore_patterns)?;

        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(self.config.respect_gitignore)
            .require_git(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| {
                entry.depth() == 0
                    || !should_ignore_name(&entry.file_name().to_string_lossy(), &patterns)
            });

        let mut summary = WalkSummary::default();
        for result in builder.build() {
            let entry = result.map_err(|source| AuditError::Walk { source })?;
            if entry.file_type().is_some_and(|ft| ft.is_dir()) {
                summary.directories += 1;
                continue;
            }
            summary.files += 1;

            let kind = FileKind::from_path(entry.path());
            if kind == FileKind::Other {
                continue;
            }
            tracing::debug!(path = %entry.path().display(), kind = kind.label(), "visiting");
            visit(entry.path(), kind)?;
            summary.visited += 1;
        }

        Ok(summary)
    }
}
