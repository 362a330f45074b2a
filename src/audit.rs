//! The audit context
//!
//! An [`Auditor`] owns everything a run accumulates: the imports seen in
//! source files, the modules listed in the lockfile, and the project's module
//! path. It is filled during one walk and read once to build a [`Report`].

use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

use crate::error::Result;
use crate::file_kind::FileKind;
use crate::lockfile::{parse_lockfile, read_lockfile};
use crate::manifest::{parse_manifest, read_manifest};
use crate::report::Report;
use crate::scanner::{read_source, scan_source};
use crate::walk::{SourceWalker, WalkerConfig};

#[derive(Debug, Default)]
pub struct Auditor {
    references: HashSet<String>,
    locked: HashSet<String>,
    namespace: Option<String>,
}

impl Auditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk `root` and build the report.
    pub fn run(root: &Path, config: WalkerConfig) -> Result<Report> {
        let mut auditor = Self::new();
        let summary = SourceWalker::new(config).walk(root, |path, kind| auditor.visit(path, kind))?;
        tracing::debug!(
            directories = summary.directories,
            files = summary.files,
            visited = summary.visited,
            imports = auditor.references.len(),
            locked = auditor.locked.len(),
            "walk finished"
        );
        Ok(auditor.report())
    }

    /// Read one file according to its kind.
    pub fn visit(&mut self, path: &Path, kind: FileKind) -> Result<()> {
        match kind {
            FileKind::Manifest => {
                let namespace = read_manifest(path)?;
                self.set_namespace(path, namespace);
            }
            FileKind::Lockfile => read_lockfile(path, &mut self.locked)?,
            FileKind::Source => {
                let found = read_source(path, &mut self.references)?;
                tracing::debug!(path = %path.display(), imports = found, "scanned");
            }
            FileKind::Other => {}
        }
        Ok(())
    }

    /// Read manifest content; a later manifest replaces an earlier one.
    pub fn ingest_manifest<R: BufRead>(&mut self, path: &Path, reader: R) -> Result<()> {
        let namespace = parse_manifest(path, reader)?;
        self.set_namespace(path, namespace);
        Ok(())
    }

    pub fn ingest_lockfile<R: BufRead>(&mut self, path: &Path, reader: R) -> Result<()> {
        parse_lockfile(path, reader, &mut self.locked)
    }

    pub fn ingest_source<R: BufRead>(&mut self, path: &Path, reader: R) -> Result<()> {
        scan_source(path, reader, &mut self.references).map(|_| ())
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn references(&self) -> &HashSet<String> {
        &self.references
    }

    pub fn locked(&self) -> &HashSet<String> {
        &self.locked
    }

    pub fn report(&self) -> Report {
        Report::classify(&self.references, &self.locked, self.namespace())
    }

    fn set_namespace(&mut self, path: &Path, namespace: String) {
        if let Some(previous) = self.namespace.as_deref().filter(|p| *p != namespace) {
            tracing::warn!(
                path = %path.display(),
                previous,
                module = %namespace,
                "another go.mod replaces the module path"
            );
        }
        tracing::debug!(path = %path.display(), module = %namespace, "module path");
        self.namespace = Some(namespace);
    }
}
