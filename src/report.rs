//! Classification of collected imports into report sections

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

/// Where a single import reference belongs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category<'a> {
    /// No dot anywhere in the path: part of the Go distribution.
    Builtin,
    /// Under the project's own module path; holds the path relative to it.
    Internal(&'a str),
    External,
}

/// Decide which group an import path falls into.
///
/// Rules are applied in order: a path without a `.` is builtin; a path equal
/// to the namespace or under `<namespace>/` is internal; everything else is
/// external. An import of the module root itself has nothing to strip and is
/// kept whole.
///
/// # Examples
///
/// ```
/// use depsift::report::{Category, classify_reference};
///
/// let ns = Some("example.com/app");
/// assert_eq!(classify_reference("fmt", ns), Category::Builtin);
/// assert_eq!(classify_reference("example.com/app/util", ns), Category::Internal("util"));
/// assert_eq!(classify_reference("github.com/x/y", ns), Category::External);
/// ```
pub fn classify_reference<'a>(reference: &'a str, namespace: Option<&str>) -> Category<'a> {
    if !reference.contains('.') {
        return Category::Builtin;
    }
    if let Some(ns) = namespace.filter(|ns| !ns.is_empty()) {
        if reference == ns {
            return Category::Internal(reference);
        }
        if let Some(rest) = reference
            .strip_prefix(ns)
            .and_then(|r| r.strip_prefix('/'))
        {
            return Category::Internal(rest);
        }
    }
    Category::External
}

/// Report sections in print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Builtin,
    Internal,
    External,
    Indirect,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Builtin,
        Section::Internal,
        Section::External,
        Section::Indirect,
    ];

    /// Header line printed above the section's entries.
    pub fn header(&self) -> &'static str {
        match self {
            Section::Builtin => "builtin packages:",
            Section::Internal => "packages from this module:",
            Section::External => "packages from the internet:",
            Section::Indirect => "packages imported by other packages:",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// The four sorted lists an audit produces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Module path from the manifest, if one was found.
    pub module: Option<String>,
    pub builtin: Vec<String>,
    /// Same-module imports, relative to the module path.
    pub internal: Vec<String>,
    pub external: Vec<String>,
    /// Locked modules that no scanned file imports directly.
    pub indirect: Vec<String>,
}

impl Report {
    /// Partition `references` and diff `locked` against them.
    ///
    /// A lock entry only counts as imported when some reference equals it
    /// exactly; importing a subpackage of a locked module does not.
    pub fn classify(
        references: &HashSet<String>,
        locked: &HashSet<String>,
        namespace: Option<&str>,
    ) -> Self {
        let mut report = Report {
            module: namespace.map(str::to_string),
            ..Default::default()
        };

        for reference in references {
            match classify_reference(reference, namespace) {
                Category::Builtin => report.builtin.push(reference.clone()),
                Category::Internal(rest) => report.internal.push(rest.to_string()),
                Category::External => report.external.push(reference.clone()),
            }
        }

        report.indirect = locked
            .iter()
            .filter(|entry| !references.contains(*entry))
            .cloned()
            .collect();

        report.builtin.sort();
        report.internal.sort();
        report.external.sort();
        report.indirect.sort();
        report
    }

    /// Entries of one section.
    pub fn section(&self, section: Section) -> &[String] {
        match section {
            Section::Builtin => &self.builtin,
            Section::Internal => &self.internal,
            Section::External => &self.external,
            Section::Indirect => &self.indirect,
        }
    }

    /// True when no section has entries.
    pub fn is_empty(&self) -> bool {
        Section::ALL.iter().all(|s| self.section(*s).is_empty())
    }
}
