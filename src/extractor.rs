//! Declaration walker and model assembler.
//!
//! Walks the top-level declarations of a parsed file and produces the
//! [`FileInfo`] model: the import table, then one [`FunctionInfo`] per function
//! or method declaration whose doc comments declare an API name and a route.
//! Everything in here is total: a malformed directive or an unsupported
//! signature shape degrades to omission, never to an error.

use log::debug;
use std::collections::BTreeMap;
use std::path::Path;
use tree_sitter::Node;

use crate::directive::{self, Directive};
use crate::error::Result;
use crate::model::{FileInfo, FunctionInfo, HttpMethod, ImportInfo, ParamInfo, ResultInfo};
use crate::naming;
use crate::parser::{AstParser, ParsedFile};
use crate::type_resolver;

const KEY_API: &str = "api";
const KEY_GET: &str = "get";
const KEY_POST: &str = "post";
const KEY_MID: &str = "mid";
const KEY_REQUEST: &str = "request";
const KEY_PARAMS: &str = "params";

/// Parses and analyzes a single file: the core one-file → one-model contract.
pub fn analyze_path(path: &Path) -> Result<FileInfo> {
    let parsed = AstParser::parse_file(path)?;
    Ok(extract_file(&parsed))
}

/// Extracts the full model from an already-parsed file.
pub fn extract_file(parsed: &ParsedFile) -> FileInfo {
    let root = parsed.tree.root_node();
    let source = parsed.source.as_str();

    let package_name = package_name(root, source);
    let mut imports = collect_imports(root, source);
    let mut functions = Vec::new();

    // Comments are ordinary top-level nodes; a run of line-adjacent comments
    // ending on the line directly above a declaration is its doc block.
    let mut pending: Vec<Node> = Vec::new();
    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        match child.kind() {
            "comment" => {
                if let Some(last) = pending.last() {
                    if child.start_position().row > last.end_position().row + 1 {
                        pending.clear();
                    }
                }
                pending.push(child);
            }
            "function_declaration" | "method_declaration" => {
                let doc = attached_doc(&pending, child, source);
                pending.clear();
                if doc.is_empty() {
                    continue;
                }
                if let Some(function) = extract_function(child, &doc, source, &mut imports) {
                    functions.push(function);
                }
            }
            _ => pending.clear(),
        }
    }

    FileInfo {
        package_name,
        imports,
        functions,
    }
}

/// The directive fold: one accumulator per function, reduced over its doc
/// lines. Keeps the last-wins/append semantics of each key in one place.
#[derive(Debug, Default)]
struct DirectiveFold {
    api_name: String,
    method: Option<HttpMethod>,
    url: String,
    middlewares: Vec<String>,
    requests: BTreeMap<String, String>,
    params_doc: BTreeMap<String, String>,
    comments: BTreeMap<String, Vec<String>>,
}

impl DirectiveFold {
    fn apply(&mut self, d: Directive) {
        match d.key.as_str() {
            KEY_API => {
                if d.values.is_empty() {
                    debug!("ignoring api directive with no value");
                } else {
                    self.api_name = d.values.join(" ");
                }
            }
            KEY_GET => self.set_route(HttpMethod::Get, &d.values),
            KEY_POST => self.set_route(HttpMethod::Post, &d.values),
            KEY_MID => self.middlewares = d.values,
            KEY_REQUEST => {
                if d.values.len() == 2 {
                    self.requests
                        .insert(d.values[0].clone(), d.values[1].clone());
                } else {
                    debug!(
                        "ignoring request directive with {} values (want 2)",
                        d.values.len()
                    );
                }
            }
            KEY_PARAMS => {
                if d.values.len() > 1 {
                    self.params_doc
                        .insert(d.values[0].clone(), d.values[1..].join(" "));
                } else {
                    debug!("ignoring params directive with fewer than 2 values");
                }
            }
            _ => self
                .comments
                .entry(d.key.clone())
                .or_default()
                .extend(d.values),
        }
    }

    fn set_route(&mut self, method: HttpMethod, values: &[String]) {
        let Some(url) = values.first() else {
            debug!("ignoring {} directive with no url", method.as_str());
            return;
        };
        if let Some(previous) = self.method {
            debug!(
                "duplicate route directive: {} overrides {}",
                method.as_str(),
                previous.as_str()
            );
        }
        self.method = Some(method);
        self.url = url.clone();
    }
}

fn extract_function(
    node: Node,
    doc: &[String],
    source: &str,
    imports: &mut BTreeMap<String, ImportInfo>,
) -> Option<FunctionInfo> {
    let func_name = node
        .child_by_field_name("name")
        .map(|n| node_text(n, source))?;

    let mut fold = DirectiveFold::default();
    for line in doc {
        if let Some(d) = directive::parse_line(line) {
            fold.apply(d);
        }
    }

    // A function is part of the model only once its doc block has declared a
    // name, a method, and a url; everything else is ignored silently.
    let method = fold.method?;
    if fold.api_name.is_empty() || fold.url.is_empty() {
        debug!("skipping {}: incomplete route directives", func_name);
        return None;
    }

    let scope = receiver_scope(node, source);
    let params = build_params(node, source, imports, &fold);
    let results = build_results(node, source);

    Some(FunctionInfo {
        func_name,
        api_name: fold.api_name,
        method,
        url: fold.url,
        middlewares: fold.middlewares,
        scope,
        requests: fold.requests,
        params,
        comments: fold.comments,
        results,
    })
}

/// Comment lines form the declaration's doc block only when the run ends on
/// the line directly above it.
fn attached_doc(pending: &[Node], decl: Node, source: &str) -> Vec<String> {
    match pending.last() {
        Some(last) if last.end_position().row + 1 == decl.start_position().row => pending
            .iter()
            .map(|c| node_text(*c, source))
            .collect(),
        _ => Vec::new(),
    }
}

fn package_name(root: Node, source: &str) -> String {
    let mut cursor = root.walk();
    let name = root
        .named_children(&mut cursor)
        .find(|n| n.kind() == "package_clause")
        .and_then(|clause| clause.named_child(0))
        .map(|ident| node_text(ident, source))
        .unwrap_or_default();
    name
}

/// Builds the alias → import table. Aliases collide last-wins, matching plain
/// map semantics in the consumer.
fn collect_imports(root: Node, source: &str) -> BTreeMap<String, ImportInfo> {
    let mut imports = BTreeMap::new();
    let mut cursor = root.walk();
    for child in root.named_children(&mut cursor) {
        if child.kind() != "import_declaration" {
            continue;
        }
        let mut decl_cursor = child.walk();
        for spec in child.named_children(&mut decl_cursor) {
            match spec.kind() {
                "import_spec" => add_import(spec, source, &mut imports),
                "import_spec_list" => {
                    let mut list_cursor = spec.walk();
                    for inner in spec.named_children(&mut list_cursor) {
                        if inner.kind() == "import_spec" {
                            add_import(inner, source, &mut imports);
                        }
                    }
                }
                _ => {}
            }
        }
    }
    imports
}

fn add_import(spec: Node, source: &str, imports: &mut BTreeMap<String, ImportInfo>) {
    let Some(path_node) = spec.child_by_field_name("path") else {
        return;
    };
    let path = node_text(path_node, source);
    let alias = match spec.child_by_field_name("name") {
        Some(name) => node_text(name, source),
        None => path
            .trim_matches('"')
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string(),
    };
    imports.insert(
        alias.clone(),
        ImportInfo {
            alias,
            path,
            used: false,
        },
    );
}

/// Receiver type name for `func (s *Service) ...` declarations. Only a pointer
/// to a plain named type counts; anything else leaves the scope empty.
fn receiver_scope(node: Node, source: &str) -> String {
    let Some(receiver) = node.child_by_field_name("receiver") else {
        return String::new();
    };
    let mut cursor = receiver.walk();
    let Some(decl) = receiver
        .named_children(&mut cursor)
        .find(|n| n.kind() == "parameter_declaration")
    else {
        return String::new();
    };
    let Some(ty) = decl.child_by_field_name("type") else {
        return String::new();
    };
    if ty.kind() != "pointer_type" {
        return String::new();
    }
    match ty.named_child(0) {
        Some(inner) if inner.kind() == "type_identifier" => node_text(inner, source),
        _ => String::new(),
    }
}

fn build_params(
    node: Node,
    source: &str,
    imports: &mut BTreeMap<String, ImportInfo>,
    fold: &DirectiveFold,
) -> Vec<ParamInfo> {
    let Some(list) = node.child_by_field_name("parameters") else {
        return Vec::new();
    };

    let mut params = Vec::new();
    let mut cursor = list.walk();
    for group in list.named_children(&mut cursor) {
        let type_name = match group.kind() {
            "parameter_declaration" => group
                .child_by_field_name("type")
                .map(|t| type_resolver::resolve(t, source))
                .unwrap_or_default(),
            // variadic parameters have no supported display name
            "variadic_parameter_declaration" => String::new(),
            _ => continue,
        };

        // The whole group shares one type; the import is referenced even when
        // the group declares no names.
        mark_import_used(&type_name, imports);

        let mut name_cursor = group.walk();
        for name_node in group.children_by_field_name("name", &mut name_cursor) {
            let name = node_text(name_node, source);
            params.push(ParamInfo {
                field_name: naming::ucfirst(&naming::camel(&name)),
                bind_key: naming::snake(&name),
                custom: fold.requests.get(&name).cloned().unwrap_or_default(),
                doc: fold.params_doc.get(&name).cloned().unwrap_or_default(),
                type_name: type_name.clone(),
                name,
            });
        }
    }
    params
}

/// Flags the import an `alias.Type` parameter reaches through. The qualifier
/// is whatever precedes the first dot, taken verbatim, so composite display
/// names like `[]pkg.Type` do not match an alias.
fn mark_import_used(type_name: &str, imports: &mut BTreeMap<String, ImportInfo>) {
    if let Some(pos) = type_name.find('.') {
        if pos > 0 {
            if let Some(entry) = imports.get_mut(&type_name[..pos]) {
                entry.used = true;
            }
        }
    }
}

fn build_results(node: Node, source: &str) -> Vec<ResultInfo> {
    let Some(result) = node.child_by_field_name("result") else {
        return Vec::new();
    };

    // A bare result type is a single unnamed group.
    if result.kind() != "parameter_list" {
        return vec![ResultInfo {
            name: "_R0".to_string(),
            type_name: type_resolver::resolve(result, source),
            defined: false,
        }];
    }

    let mut results = Vec::new();
    let mut cursor = result.walk();
    for (idx, group) in result
        .named_children(&mut cursor)
        .filter(|n| n.kind() == "parameter_declaration")
        .enumerate()
    {
        let type_name = group
            .child_by_field_name("type")
            .map(|t| type_resolver::resolve(t, source))
            .unwrap_or_default();

        let mut name_cursor = group.walk();
        let names: Vec<String> = group
            .children_by_field_name("name", &mut name_cursor)
            .map(|n| node_text(n, source))
            .collect();

        if names.is_empty() {
            // synthetic placeholder, indexed by result group
            results.push(ResultInfo {
                name: format!("_R{}", idx),
                type_name,
                defined: false,
            });
        } else {
            for name in names {
                results.push(ResultInfo {
                    name,
                    type_name: type_name.clone(),
                    defined: true,
                });
            }
        }
    }
    results
}

fn node_text(node: Node, source: &str) -> String {
    node.utf8_text(source.as_bytes()).unwrap_or_default().to_string()
}
