//! Output model of a file scan.
//!
//! One [`FileInfo`] per analyzed source file, owning the import table and every
//! retained function. All records are plain data with serde derives so the
//! downstream router-codegen tooling can consume them as YAML or JSON; nothing
//! here touches the syntax tree.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::PathBuf;

/// Structured description of one analyzed source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileInfo {
    /// Package name from the package clause
    pub package_name: String,
    /// Import table keyed by alias
    pub imports: BTreeMap<String, ImportInfo>,
    /// Retained functions, in declaration order
    pub functions: Vec<FunctionInfo>,
}

/// One entry of the import table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportInfo {
    /// Explicit import name, or the last segment of the import path
    pub alias: String,
    /// The import path literal as written, quotes included
    pub path: String,
    /// Whether any retained function's parameter type references this alias
    pub used: bool,
}

/// HTTP method declared by a `get` or `post` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// Everything extracted for one annotated function declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionInfo {
    /// Declared function name
    pub func_name: String,
    /// Logical API name from the `api` directive
    pub api_name: String,
    /// Method from the last `get`/`post` directive processed
    pub method: HttpMethod,
    /// Route URL from the same directive as the method
    pub url: String,
    /// Middleware chain from the `mid` directive
    pub middlewares: Vec<String>,
    /// Receiver type name for pointer-receiver methods, empty otherwise
    pub scope: String,
    /// Custom binding expressions from `request` directives, keyed by parameter
    pub requests: BTreeMap<String, String>,
    /// Declared parameters merged with directive metadata
    pub params: Vec<ParamInfo>,
    /// Unrecognized directives, multi-valued, in encounter order
    pub comments: BTreeMap<String, Vec<String>>,
    /// Declared results
    pub results: Vec<ResultInfo>,
}

/// One declared parameter, merged with directive-supplied metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParamInfo {
    /// Name as declared in the signature
    pub name: String,
    /// Display name of the parameter type ("" for unsupported shapes)
    pub type_name: String,
    /// Exported field name for the generated request struct
    pub field_name: String,
    /// Snake-case key correlating a form/query field with this parameter
    pub bind_key: String,
    /// Custom binding expression from a `request` directive, "" if absent
    pub custom: String,
    /// Free-text documentation from a `params` directive, "" if absent
    pub doc: String,
}

/// One declared result value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultInfo {
    /// Declared name, or a synthetic `_R<n>` placeholder
    pub name: String,
    /// Display name of the result type
    pub type_name: String,
    /// True when the signature names this result
    pub defined: bool,
}

/// Aggregate output of a directory scan: one entry per analyzed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub files: Vec<AnalyzedFile>,
}

/// A single file's model together with the path it came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedFile {
    pub path: PathBuf,
    pub model: FileInfo,
}

impl FunctionInfo {
    /// Renders the Go source text of the request-binding struct for this
    /// function: an optional embedded scope-type line, then one field line per
    /// parameter with a `form` tag built from the bind key.
    ///
    /// Returns an empty string when there is nothing to bind (no parameters and
    /// no scope). The exact layout is consumed verbatim by the router codegen.
    pub fn request_struct_body(&self) -> String {
        if self.params.is_empty() && self.scope.is_empty() {
            return String::new();
        }
        let mut out = String::from("req := struct{\n");
        if !self.scope.is_empty() {
            out.push('\t');
            out.push_str(&self.scope);
            out.push('\n');
        }
        for p in &self.params {
            let _ = writeln!(out, "\t{} {} `form:\"{}\"`", p.field_name, p.type_name, p.bind_key);
        }
        out.push_str("\t}\n");
        out
    }
}
