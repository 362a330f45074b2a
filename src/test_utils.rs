//! Test utilities for building throwaway source trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The directory is removed when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Create a tree holding a `go.mod` for `module`.
    pub fn with_module(module: &str) -> Self {
        let tree = Self::new();
        tree.add_file("go.mod", &format!("module {module}\n\ngo 1.22\n"));
        tree
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Write a Go file in `package` importing each of `imports`.
    pub fn add_go_file(&self, path: &str, package: &str, imports: &[&str]) -> PathBuf {
        let mut content = format!("package {package}\n\nimport (\n");
        for import in imports {
            content.push_str(&format!("\t\"{import}\"\n"));
        }
        content.push_str(")\n\nfunc init() {}\n");
        self.add_file(path, &content)
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
