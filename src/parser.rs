use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use tree_sitter::Node;

use crate::error::{Error, Result};

/// Source loader and parser for Go files.
///
/// Uses the tree-sitter Go grammar to turn raw source text into a syntax tree.
/// Unlike a conventional compiler front end, tree-sitter keeps comment tokens
/// as ordinary nodes in the tree, which is exactly what the directive
/// extraction downstream needs.
///
/// # Example
///
/// ```no_run
/// use routemap_from_source::parser::AstParser;
/// use std::path::Path;
///
/// let parsed = AstParser::parse_file(Path::new("router/user.go")).unwrap();
/// println!("root has {} children", parsed.tree.root_node().named_child_count());
/// ```
pub struct AstParser;

/// A successfully parsed Go file: the path, the raw source, and the tree.
///
/// The tree borrows nothing; nodes handed out by the walker reference both the
/// tree and the source text, so the two travel together.
pub struct ParsedFile {
    /// Path to the source file
    pub path: PathBuf,
    /// Raw file content the tree points into
    pub source: String,
    /// The parsed syntax tree, comments included
    pub tree: tree_sitter::Tree,
}

impl std::fmt::Debug for ParsedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("ParsedFile")
            .field("path", &self.path)
            .field("source_len", &self.source.len())
            .finish()
    }
}

impl AstParser {
    /// Reads and parses a single Go source file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Syntax`]
    /// if the content is not valid Go.
    pub fn parse_file(path: &Path) -> Result<ParsedFile> {
        debug!("Parsing file: {}", path.display());

        let source = fs::read_to_string(path).map_err(|source| Error::Io {
            file: path.to_path_buf(),
            source,
        })?;

        Self::parse_source(path, source)
    }

    /// Parses already-loaded source text, attributing errors to `path`.
    pub fn parse_source(path: &Path, source: String) -> Result<ParsedFile> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .expect("Failed to load Go grammar");

        let tree = parser.parse(&source, None).ok_or_else(|| Error::Syntax {
            file: path.to_path_buf(),
            message: "parser produced no tree".to_string(),
        })?;

        // tree-sitter never refuses input; malformed source surfaces as error
        // or missing nodes inside the tree.
        let root = tree.root_node();
        if root.has_error() {
            let message = match first_error_node(root) {
                Some(node) => format!(
                    "invalid syntax at line {}, column {}",
                    node.start_position().row + 1,
                    node.start_position().column + 1
                ),
                None => "invalid syntax".to_string(),
            };
            return Err(Error::Syntax {
                file: path.to_path_buf(),
                message,
            });
        }

        debug!("Successfully parsed file: {}", path.display());

        Ok(ParsedFile {
            path: path.to_path_buf(),
            source,
            tree,
        })
    }

    /// Parses multiple files, continuing past individual failures.
    ///
    /// Failures are logged as warnings and kept in the result list so the
    /// caller can decide whether partial output is acceptable.
    pub fn parse_files(paths: &[PathBuf]) -> Vec<Result<ParsedFile>> {
        debug!("Parsing {} files", paths.len());

        let results: Vec<Result<ParsedFile>> = paths
            .iter()
            .map(|path| match Self::parse_file(path) {
                Ok(parsed) => Ok(parsed),
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    Err(e)
                }
            })
            .collect();

        let failures = results.iter().filter(|r| r.is_err()).count();
        debug!(
            "Parsing complete: {} succeeded, {} failed",
            results.len() - failures,
            failures
        );

        results
    }
}

/// Depth-first search for the first error or missing node.
fn first_error_node(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if !child.has_error() {
            continue;
        }
        if let Some(found) = first_error_node(child) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_temp_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let file_path = dir.path().join(name);
        fs::write(&file_path, content).unwrap();
        file_path
    }

    const VALID_GO: &str = r#"package router

import "fmt"

// PrintUser prints a user.
func PrintUser(id int64) error {
	fmt.Println(id)
	return nil
}
"#;

    #[test]
    fn test_parse_valid_go_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = create_temp_file(&temp_dir, "valid.go", VALID_GO);

        let result = AstParser::parse_file(&file_path);

        assert!(result.is_ok());
        let parsed = result.unwrap();
        assert_eq!(parsed.path, file_path);
        assert!(parsed.tree.root_node().named_child_count() > 0);
        assert!(!parsed.tree.root_node().has_error());
    }

    #[test]
    fn test_parse_invalid_go_file() {
        let temp_dir = TempDir::new().unwrap();
        let invalid = "package router\n\nfunc broken( } {\n\tx := := 1\n";
        let file_path = create_temp_file(&temp_dir, "invalid.go", invalid);

        let result = AstParser::parse_file(&file_path);

        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("syntax error"), "unexpected message: {}", msg);
        assert!(msg.contains("invalid.go"));
    }

    #[test]
    fn test_parse_nonexistent_file() {
        let result = AstParser::parse_file(Path::new("/nonexistent/file.go"));

        assert!(result.is_err());
        let msg = result.unwrap_err().to_string();
        assert!(msg.contains("failed to read"));
    }

    #[test]
    fn test_parse_source_keeps_comments() {
        let parsed =
            AstParser::parse_source(Path::new("mem.go"), VALID_GO.to_string()).unwrap();

        let root = parsed.tree.root_node();
        let mut cursor = root.walk();
        let has_comment = root
            .named_children(&mut cursor)
            .any(|n| n.kind() == "comment");
        assert!(has_comment, "comment nodes should be retained in the tree");
    }

    #[test]
    fn test_parse_files_batch_mixed() {
        let temp_dir = TempDir::new().unwrap();

        let good1 = create_temp_file(&temp_dir, "a.go", "package a\n");
        let good2 = create_temp_file(&temp_dir, "b.go", "package b\n\nfunc B() {}\n");
        let bad = create_temp_file(&temp_dir, "c.go", "package c\n\nfunc ) ( {\n");

        let results = AstParser::parse_files(&[good1.clone(), good2, bad]);

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_ok());
        assert!(results[2].is_err());
        assert_eq!(results[0].as_ref().unwrap().path, good1);
    }

    #[test]
    fn test_parse_files_empty_list() {
        let results = AstParser::parse_files(&[]);
        assert!(results.is_empty());
    }

    #[test]
    fn test_error_position_reported() {
        let err = AstParser::parse_source(
            Path::new("pos.go"),
            "package p\n\nfunc f( {}\n".to_string(),
        )
        .unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("line"), "message should carry a position: {}", msg);
    }
}
