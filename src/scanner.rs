use anyhow::Result;
use log::warn;
use std::path::PathBuf;
use walkdir::WalkDir;

/// File scanner for traversing project directories.
///
/// Recursively walks a project directory collecting Go source files. Hidden
/// directories, `vendor` trees, and `testdata` fixtures are skipped; they
/// carry third-party or intentionally odd source that should never feed the
/// route model.
///
/// # Example
///
/// ```no_run
/// use routemap_from_source::scanner::FileScanner;
/// use std::path::PathBuf;
///
/// let scanner = FileScanner::new(PathBuf::from("./my-project"));
/// let result = scanner.scan().unwrap();
/// println!("Found {} Go files", result.go_files.len());
/// ```
pub struct FileScanner {
    root_path: PathBuf,
}

/// Result of a directory scan.
pub struct ScanResult {
    /// Paths of all discovered `.go` files
    pub go_files: Vec<PathBuf>,
    /// Warnings for entries that could not be accessed
    pub warnings: Vec<String>,
}

impl FileScanner {
    /// Creates a scanner rooted at `root_path`.
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path }
    }

    /// Walks the tree and collects `.go` files.
    ///
    /// Inaccessible entries are logged and recorded as warnings; the scan
    /// itself keeps going.
    pub fn scan(&self) -> Result<ScanResult> {
        let mut go_files = Vec::new();
        let mut warnings = Vec::new();

        for entry in WalkDir::new(&self.root_path)
            .into_iter()
            .filter_entry(|e| {
                if e.path() == self.root_path {
                    return true;
                }
                let file_name = e.file_name().to_string_lossy();
                let is_hidden = file_name.starts_with('.');
                let is_skipped_dir =
                    e.file_type().is_dir() && (file_name == "vendor" || file_name == "testdata");
                !is_hidden && !is_skipped_dir
            })
        {
            match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("go") {
                        go_files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    let warning = format!("Failed to access path: {}", e);
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        Ok(ScanResult { go_files, warnings })
    }
}
