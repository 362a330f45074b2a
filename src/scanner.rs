//! Import extraction from Go source files
//!
//! Scanning is line-oriented, not a parse. A file's import section is taken
//! to be everything before the first top-level declaration, and block
//! comments are tracked with a single on/off flag. All of that lives in
//! [`LineClassifier`]; [`scan_source`] only acts on what it returns.

use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AuditError, Result};
use crate::file_utils::{numbered_lines, open_lines};

const COMMENT_START: &str = "/*";
const COMMENT_END: &str = "*/";

static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(func |var |const |type )").expect("DECLARATION regex is invalid")
});

static IMPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(import |(?-u:\s)+)?((?-u:\w)+ )?"([-./0-9A-Za-z_]+)""#)
        .expect("IMPORT regex is invalid")
});

// Everything up to the opening quote of IMPORT.
static IMPORT_ATTEMPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(import |(?-u:\s)+)?((?-u:\w)+ )?""#).expect("IMPORT_ATTEMPT regex is invalid")
});

/// What a single source line means to the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Opens, closes, or sits inside a block comment.
    Comment,
    /// First top-level declaration; nothing after it is scanned.
    Declaration,
    /// A quoted import path.
    Import(&'a str),
    /// Starts like an import but the quoted path cannot be captured.
    Malformed,
    Other,
}

/// Line classifier carrying block-comment state across the lines of one file.
///
/// A line that opens a block comment is skipped whole and the close token is
/// only looked for on later lines, so `/* ... */` on one line leaves the
/// comment open until some later line contains `*/`.
#[derive(Debug, Default)]
pub struct LineClassifier {
    in_comment: bool,
}

impl LineClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a block comment is currently open.
    pub fn in_comment(&self) -> bool {
        self.in_comment
    }

    pub fn classify<'a>(&mut self, line: &'a str) -> LineKind<'a> {
        if !self.in_comment && line.contains(COMMENT_START) {
            self.in_comment = true;
            return LineKind::Comment;
        }
        if self.in_comment {
            if line.contains(COMMENT_END) {
                self.in_comment = false;
            }
            return LineKind::Comment;
        }
        if DECLARATION.is_match(line) {
            return LineKind::Declaration;
        }
        if let Some(path) = IMPORT.captures(line).and_then(|caps| caps.get(3)) {
            return LineKind::Import(path.as_str());
        }
        if IMPORT_ATTEMPT.is_match(line) {
            return LineKind::Malformed;
        }
        LineKind::Other
    }
}

/// Scan the Go source file at `path`, adding its imports to `references`.
pub fn read_source(path: &Path, references: &mut HashSet<String>) -> Result<usize> {
    scan_source(path, open_lines(path)?, references)
}

/// Scan Go source content, adding its imports to `references`.
///
/// Returns the number of import lines seen. Reading stops at the first
/// declaration line. `path` is only used to label errors.
pub fn scan_source<R: BufRead>(
    path: &Path,
    reader: R,
    references: &mut HashSet<String>,
) -> Result<usize> {
    let mut classifier = LineClassifier::new();
    let mut found = 0;

    for line in numbered_lines(reader) {
        let (line_number, text) = line.map_err(|e| AuditError::io(path, e))?;
        match classifier.classify(&text) {
            LineKind::Declaration => break,
            LineKind::Import(import) => {
                references.insert(import.to_string());
                found += 1;
            }
            LineKind::Malformed => {
                return Err(AuditError::MalformedImport {
                    path: path.to_path_buf(),
                    line_number,
                    line: text,
                });
            }
            LineKind::Comment | LineKind::Other => {}
        }
    }

    Ok(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(content: &str) -> Result<HashSet<String>> {
        let mut references = HashSet::new();
        scan_source(Path::new("main.go"), content.as_bytes(), &mut references)?;
        Ok(references)
    }

    fn set(items: &[&str]) -> HashSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_and_block_imports() {
        let content = r#"package main

import "fmt"

import (
	"os"
	"path/filepath"

	"github.com/spf13/cobra"
	"example.com/app/internal/config"
)

func main() {}
"#;
        assert_eq!(
            scan(content).unwrap(),
            set(&[
                "fmt",
                "os",
                "path/filepath",
                "github.com/spf13/cobra",
                "example.com/app/internal/config",
            ])
        );
    }

    #[test]
    fn test_aliased_and_blank_imports() {
        let content = "package main\n\nimport (\n\tyaml \"gopkg.in/yaml.v3\"\n\t_ \"embed\"\n)\n";
        assert_eq!(scan(content).unwrap(), set(&["gopkg.in/yaml.v3", "embed"]));
    }

    #[test]
    fn test_aliased_single_import() {
        assert_eq!(
            scan("import str \"strings\"\n").unwrap(),
            set(&["strings"])
        );
    }

    #[test]
    fn test_dot_import_is_skipped() {
        let content = "import (\n\t. \"github.com/onsi/gomega\"\n\t\"fmt\"\n)\n";
        assert_eq!(scan(content).unwrap(), set(&["fmt"]));
    }

    #[test]
    fn test_stops_at_first_declaration() {
        let content = r#"package main

import "fmt"

type server struct{}

import "os"
"#;
        assert_eq!(scan(content).unwrap(), set(&["fmt"]));
    }

    #[test]
    fn test_each_declaration_keyword_stops() {
        for keyword in ["func", "var", "const", "type"] {
            let content = format!("import \"fmt\"\n{keyword} x\n\t\"os\"\n");
            assert_eq!(scan(&content).unwrap(), set(&["fmt"]), "keyword {keyword}");
        }
    }

    #[test]
    fn test_indented_declaration_does_not_stop() {
        let content = "import (\n\t\"fmt\"\n)\n\tfunc x\n\t\"os\"\n";
        assert_eq!(scan(content).unwrap(), set(&["fmt", "os"]));
    }

    #[test]
    fn test_block_comment_is_skipped() {
        let content = r#"package main

/*
import "skipped"
*/

import "fmt"
"#;
        assert_eq!(scan(content).unwrap(), set(&["fmt"]));
    }

    #[test]
    fn test_declaration_inside_comment_does_not_stop() {
        let content = "/*\nfunc example() {}\n*/\nimport \"fmt\"\n";
        assert_eq!(scan(content).unwrap(), set(&["fmt"]));
    }

    #[test]
    fn test_unclosed_block_comment_skips_rest_of_file() {
        let content = "package main\n\n/* started\nimport \"fmt\"\nimport \"os\"\n";
        assert!(scan(content).unwrap().is_empty());
    }

    #[test]
    fn test_single_line_block_comment_stays_open() {
        let content = r#"package main
/* one-liner */
import "skipped"
// closes here */
import "fmt"
"#;
        assert_eq!(scan(content).unwrap(), set(&["fmt"]));
    }

    #[test]
    fn test_comment_state_is_per_file() {
        let mut references = HashSet::new();
        scan_source(Path::new("a.go"), "/* open\n".as_bytes(), &mut references).unwrap();
        scan_source(Path::new("b.go"), "import \"fmt\"\n".as_bytes(), &mut references).unwrap();
        assert_eq!(references, set(&["fmt"]));
    }

    #[test]
    fn test_malformed_import_missing_closing_quote() {
        let content = "package main\n\nimport (\n\t\"github.com/x/y\n)\n";
        let err = scan(content).unwrap_err();
        match err {
            AuditError::MalformedImport {
                path,
                line_number,
                line,
            } => {
                assert_eq!(path, Path::new("main.go"));
                assert_eq!(line_number, 4);
                assert_eq!(line, "\t\"github.com/x/y");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_import_bad_characters() {
        let err = scan("import \"github.com/x/y z\"\n").unwrap_err();
        assert!(matches!(err, AuditError::MalformedImport { line_number: 1, .. }));
    }

    #[test]
    fn test_line_comments_are_not_imports() {
        let content = "// import \"fmt\"\n\t// \"os\"\npackage main\n";
        assert!(scan(content).unwrap().is_empty());
    }

    #[test]
    fn test_trailing_comment_after_import() {
        assert_eq!(
            scan("\t\"net/http\" // server\n").unwrap(),
            set(&["net/http"])
        );
    }

    #[test]
    fn test_classifier_tracks_comment_state() {
        let mut classifier = LineClassifier::new();
        assert_eq!(classifier.classify("package main"), LineKind::Other);
        assert_eq!(classifier.classify("/*"), LineKind::Comment);
        assert!(classifier.in_comment());
        assert_eq!(classifier.classify("func x() {}"), LineKind::Comment);
        assert_eq!(classifier.classify("*/"), LineKind::Comment);
        assert!(!classifier.in_comment());
        assert_eq!(classifier.classify("\t\"fmt\""), LineKind::Import("fmt"));
        assert_eq!(classifier.classify("func main() {"), LineKind::Declaration);
    }

    #[test]
    fn test_returns_import_line_count() {
        let mut references = HashSet::new();
        let found = scan_source(
            Path::new("main.go"),
            "import \"fmt\"\nimport \"fmt\"\n".as_bytes(),
            &mut references,
        )
        .unwrap();
        assert_eq!(found, 2);
        assert_eq!(references.len(), 1);
    }
}
