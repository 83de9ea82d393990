use std::path::PathBuf;

/// Result type alias for the analysis core
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors a single file scan can produce.
///
/// Everything past a successful parse degrades instead of failing, so these two
/// kinds are the only ones callers ever see from the core pipeline.
#[derive(Debug)]
pub enum Error {
    /// The source file could not be read
    Io { file: PathBuf, source: std::io::Error },
    /// The source file is not syntactically valid Go
    Syntax { file: PathBuf, message: String },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Io { file, source } => {
                write!(f, "failed to read {}: {}", file.display(), source)
            }
            Error::Syntax { file, message } => {
                write!(f, "syntax error in {}: {}", file.display(), message)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            Error::Syntax { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_io_error_display() {
        let err = Error::Io {
            file: Path::new("router.go").to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("router.go"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_syntax_error_display() {
        let err = Error::Syntax {
            file: Path::new("broken.go").to_path_buf(),
            message: "error node at line 3".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("broken.go"));
        assert!(msg.contains("line 3"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error as _;

        let err = Error::Io {
            file: Path::new("a.go").to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());

        let err = Error::Syntax {
            file: Path::new("a.go").to_path_buf(),
            message: "bad".to_string(),
        };
        assert!(err.source().is_none());
    }
}
