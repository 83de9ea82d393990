//! Route model extractor - static analysis of annotated Go source.
//!
//! This library scans Go source files for function declarations whose doc
//! comments carry route annotations and extracts a structured model of each
//! one: the logical API name, HTTP method and URL, middleware chain, declared
//! parameters merged with their documentation and binding overrides, and
//! declared results. The model feeds a downstream router-codegen step; nothing
//! here executes, type-checks, or persists anything.
//!
//! # Annotations
//!
//! A function participates when its doc block contains at least `@api`, and
//! one of `@get`/`@post`:
//!
//! ```go
//! //@api Get user
//! //@get /user/get
//! //@mid VerifyUser
//! //@params id user id
//! func (s *UserService) GetUser(id int64) (*User, error) { ... }
//! ```
//!
//! # Architecture
//!
//! The modules form a single-pass pipeline:
//!
//! 1. [`scanner`] - Recursively scans project directories for Go files
//! 2. [`parser`] - Parses Go source into comment-retaining syntax trees
//! 3. [`directive`] - Turns one comment line into an optional `@key values` directive
//! 4. [`type_resolver`] - Resolves type expressions into display names
//! 5. [`extractor`] - Walks declarations and assembles the per-file model
//! 6. [`model`] - The output records, including request-struct rendering
//! 7. [`serializer`] - Serializes the model to YAML or JSON
//!
//! Support modules: [`naming`] (field/bind-key case transforms) and [`error`]
//! (the fatal I/O and syntax error kinds).
//!
//! # Example Usage
//!
//! ```no_run
//! use routemap_from_source::{extractor, parser::AstParser, scanner::FileScanner};
//! use std::path::PathBuf;
//!
//! // One file, one model
//! let info = extractor::analyze_path(std::path::Path::new("router/user.go")).unwrap();
//! println!("package {} has {} routes", info.package_name, info.functions.len());
//!
//! // Or a whole project
//! let scanner = FileScanner::new(PathBuf::from("./my-service"));
//! let scan_result = scanner.scan().unwrap();
//! for result in AstParser::parse_files(&scan_result.go_files) {
//!     if let Ok(parsed) = result {
//!         let model = extractor::extract_file(&parsed);
//!         for f in &model.functions {
//!             println!("{} {} -> {}", f.method.as_str(), f.url, f.func_name);
//!         }
//!     }
//! }
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module which provides a complete CLI application.

pub mod cli;
pub mod directive;
pub mod error;
pub mod extractor;
pub mod model;
pub mod naming;
pub mod parser;
pub mod scanner;
pub mod serializer;
pub mod type_resolver;
