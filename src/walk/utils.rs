//! Shared helpers for the source walker

use glob::Pattern;

use crate::error::{AuditError, Result};

/// Compile ignore globs, failing on the first invalid one.
pub fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|source| AuditError::InvalidPattern {
                pattern: p.clone(),
                source,
            })
        })
        .collect()
}

/// Check if an entry with this file name matches one of the ignore globs.
///
/// No name is skipped implicitly; `.git` and other hidden entries only drop
/// out when gitignore handling is switched on.
pub fn should_ignore_name(name: &str, patterns: &[Pattern]) -> bool {
    patterns.iter().any(|p| p.matches(name))
}
