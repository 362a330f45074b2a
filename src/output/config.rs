//! Output configuration types

use std::env;
use std::ffi::{OsStr, OsString};
use std::io::{self, IsTerminal};

use clap::ValueEnum;

/// When the text report may use color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    /// Color on a terminal, unless the environment says otherwise
    #[default]
    Auto,
    /// Always color headers
    Always,
    /// Never color headers
    Never,
}

impl ColorWhen {
    /// Resolve against the process environment and stdout.
    pub fn resolve(self) -> bool {
        self.resolve_with(io::stdout().is_terminal(), |key| env::var_os(key))
    }

    /// Resolve with an explicit terminal check and environment lookup.
    ///
    /// For `Auto`, a non-empty `NO_COLOR` wins over `FORCE_COLOR`, and
    /// `TERM=dumb` turns color off even on a terminal.
    pub fn resolve_with<F>(self, is_terminal: bool, var: F) -> bool
    where
        F: Fn(&str) -> Option<OsString>,
    {
        match self {
            ColorWhen::Always => true,
            ColorWhen::Never => false,
            ColorWhen::Auto => {
                if var("NO_COLOR").is_some_and(|v| !v.is_empty()) {
                    false
                } else if var("FORCE_COLOR").is_some() {
                    true
                } else {
                    is_terminal && var("TERM").as_deref() != Some(OsStr::new("dumb"))
                }
            }
        }
    }
}

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    pub fn new(color: ColorWhen) -> Self {
        Self {
            use_color: color.resolve(),
        }
    }
}
