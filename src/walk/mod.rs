//! Source tree walking
//!
//! A single depth-first pass over the tree, handing every manifest, lockfile
//! and Go source file to a visitor in file-name order.

mod config;
mod utils;
mod walker;

pub use config::WalkerConfig;
pub use utils::{compile_patterns, should_ignore_name};
pub use walker::{SourceWalker, WalkSummary};
