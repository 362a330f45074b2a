//! Configuration types for the source walker

/// Configuration for walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Honor .gitignore/.ignore files and skip hidden entries.
    /// Off by default: every file under the root is visited.
    pub respect_gitignore: bool,
    /// File-name globs to skip, files and directories alike.
    pub ignore_patterns: Vec<String>,
}
