use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::path::PathBuf;

/// Route model extractor - builds route registration models from annotated Go source
#[derive(Parser, Debug)]
#[command(name = "routemap-from-source")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to a Go project directory or a single Go source file
    #[arg(value_name = "PROJECT_PATH")]
    pub project_path: PathBuf,

    /// Output format (yaml or json)
    #[arg(short = 'f', long = "format", value_enum, default_value = "yaml")]
    pub output_format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_path: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// YAML format
    Yaml,
    /// JSON format
    Json,
}

/// Parse command line arguments
pub fn parse_args() -> Result<CliArgs> {
    let args = CliArgs::parse();
    parse_args_from_parsed(args)
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    if !args.project_path.exists() {
        anyhow::bail!(
            "Project path does not exist: {}",
            args.project_path.display()
        );
    }

    info!("Project path: {}", args.project_path.display());
    info!("Output format: {:?}", args.output_format);
    if let Some(ref output) = args.output_path {
        info!("Output file: {}", output.display());
    } else {
        info!("Output: stdout");
    }

    Ok(args)
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    use crate::extractor;
    use crate::model::{AnalyzedFile, ScanReport};
    use crate::parser::{AstParser, ParsedFile};
    use crate::scanner::FileScanner;
    use crate::serializer::{serialize_json, serialize_yaml, write_to_file};

    info!("Starting route model extraction...");

    // Step 1: collect the Go files to analyze
    let go_files = if args.project_path.is_file() {
        vec![args.project_path.clone()]
    } else {
        info!("Scanning project directory...");
        let scanner = FileScanner::new(args.project_path.clone());
        let scan_result = scanner.scan()?;
        for warning in &scan_result.warnings {
            log::warn!("{}", warning);
        }
        scan_result.go_files
    };

    info!("Found {} Go files", go_files.len());
    if go_files.is_empty() {
        anyhow::bail!("No Go files found in the project directory");
    }

    // Step 2: parse into syntax trees, tolerating per-file failures
    info!("Parsing Go files...");
    let parse_results = AstParser::parse_files(&go_files);
    let parsed_files: Vec<ParsedFile> = parse_results
        .into_iter()
        .filter_map(|r| match r {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                debug!("Skipping file due to parse error: {}", e);
                None
            }
        })
        .collect();

    info!("Successfully parsed {} files", parsed_files.len());
    if parsed_files.is_empty() {
        anyhow::bail!("No files could be parsed successfully");
    }

    // Step 3: extract one model per file
    info!("Extracting annotated functions...");
    let mut files = Vec::new();
    let mut function_count = 0;
    for parsed in &parsed_files {
        let model = extractor::extract_file(parsed);
        debug!(
            "{}: {} annotated functions",
            parsed.path.display(),
            model.functions.len()
        );
        function_count += model.functions.len();

        for import in model.imports.values() {
            if !import.used {
                debug!(
                    "{}: import {} not referenced by any parameter type",
                    parsed.path.display(),
                    import.alias
                );
            }
        }

        files.push(AnalyzedFile {
            path: parsed.path.clone(),
            model,
        });
    }

    if function_count == 0 {
        log::warn!("No annotated functions found in the project");
    }

    let report = ScanReport { files };

    // Step 4: serialize to the requested format
    info!("Serializing to {:?} format...", args.output_format);
    let content = match args.output_format {
        OutputFormat::Yaml => serialize_yaml(&report)?,
        OutputFormat::Json => serialize_json(&report)?,
    };

    // Step 5: output to file or stdout
    if let Some(output_path) = &args.output_path {
        write_to_file(&content, output_path)?;
        info!("Wrote route model to {}", output_path.display());
    } else {
        println!("{}", content);
    }

    info!("Extraction complete!");
    info!("Summary:");
    info!("  - Files found: {}", go_files.len());
    info!("  - Files parsed: {}", report.files.len());
    info!("  - Annotated functions: {}", function_count);

    Ok(())
}
