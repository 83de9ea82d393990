//! Route model extractor - command-line tool for analyzing annotated Go source.
//!
//! This binary scans a Go project for functions whose doc comments carry route
//! annotations (`//@api`, `//@get`, `//@post`, ...) and emits the extracted
//! route model as YAML or JSON for downstream router code generation.
//!
//! # Usage
//!
//! ```bash
//! routemap-from-source [OPTIONS] <PROJECT_PATH>
//! ```
//!
//! # Examples
//!
//! Emit the model for a project as YAML:
//! ```bash
//! routemap-from-source ./my-service -o routes.yaml
//! ```
//!
//! Analyze a single file as JSON:
//! ```bash
//! routemap-from-source ./router/user.go -f json
//! ```
//!
//! Enable verbose logging:
//! ```bash
//! routemap-from-source ./my-service -v
//! ```

mod cli;
mod directive;
mod error;
mod extractor;
mod model;
mod naming;
mod parser;
mod scanner;
mod serializer;
mod type_resolver;

use anyhow::Result;
use clap::Parser;
use log::info;

fn main() -> Result<()> {
    // We need to parse args twice: once to get verbose flag, then again after logger init
    // First, do a quick parse just to check for verbose flag
    let args_for_verbose = cli::CliArgs::parse();

    // Initialize logger based on verbose flag
    let log_level = if args_for_verbose.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("Route model extractor starting...");

    // Now do the full parse with validation
    let args = cli::parse_args_from_parsed(args_for_verbose)?;

    cli::run(args)?;

    info!("Route model extraction completed successfully");

    Ok(())
}
