//! Depsift - sort a Go module's imports into builtin, local and third-party,
//! and list the go.sum entries nothing imports directly

pub mod audit;
pub mod error;
pub mod file_kind;
pub mod file_utils;
pub mod lockfile;
pub mod manifest;
pub mod output;
pub mod report;
pub mod scanner;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use audit::Auditor;
pub use error::{AuditError, Result};
pub use file_kind::FileKind;
pub use output::{ColorWhen, OutputConfig, print_json, print_report, write_json, write_report};
pub use report::{Category, Report, Section, classify_reference};
pub use scanner::{LineClassifier, LineKind};
pub use walk::{SourceWalker, WalkerConfig};
