//! Display-name resolution for type expressions.
//!
//! Converts a type-expression node into the flat string the generated binding
//! code uses: `[]map[string]int`, `pkg.Type`, `interface{}`. The supported
//! shapes are a closed set; anything outside it resolves to an empty string so
//! an exotic signature degrades instead of failing the scan.
//!
//! Pointer types resolve to their pointee: the output is a display/codegen
//! name, not a type-faithful signature.

use tree_sitter::Node;

/// Recursively resolves a type-expression node into its display name.
pub fn resolve(node: Node, source: &str) -> String {
    match node.kind() {
        "type_identifier" | "identifier" | "package_identifier" | "field_identifier" => {
            node_text(node, source)
        }
        "interface_type" => {
            if node.named_child_count() == 0 {
                "interface{}".to_string()
            } else {
                String::new()
            }
        }
        "pointer_type" => match node.named_child(0) {
            Some(inner) => resolve(inner, source),
            None => String::new(),
        },
        "slice_type" | "array_type" => match node.child_by_field_name("element") {
            Some(element) => format!("[]{}", resolve(element, source)),
            None => String::new(),
        },
        "map_type" => {
            match (
                node.child_by_field_name("key"),
                node.child_by_field_name("value"),
            ) {
                (Some(key), Some(value)) => {
                    format!("map[{}]{}", resolve(key, source), resolve(value, source))
                }
                _ => String::new(),
            }
        }
        "qualified_type" => {
            match (
                node.child_by_field_name("package"),
                node.child_by_field_name("name"),
            ) {
                (Some(package), Some(name)) => {
                    format!("{}.{}", resolve(package, source), node_text(name, source))
                }
                _ => String::new(),
            }
        }
        _ => String::new(),
    }
}

fn node_text(node: Node, source: &str) -> String {
    node.utf8_text(source.as_bytes()).unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::AstParser;
    use pretty_assertions::assert_eq;
    use std::path::Path;

    /// Parses a one-parameter function and resolves that parameter's type.
    fn resolve_param_type(type_src: &str) -> String {
        let source = format!("package t\n\nfunc f(x {}) {{}}\n", type_src);
        let parsed = AstParser::parse_source(Path::new("t.go"), source).unwrap();
        let root = parsed.tree.root_node();

        let mut cursor = root.walk();
        let func = root
            .named_children(&mut cursor)
            .find(|n| n.kind() == "function_declaration")
            .expect("function declaration");
        let params = func.child_by_field_name("parameters").expect("parameters");
        let mut cursor = params.walk();
        let decl = params
            .named_children(&mut cursor)
            .find(|n| n.kind() == "parameter_declaration")
            .expect("parameter declaration");
        let ty = decl.child_by_field_name("type").expect("type");

        resolve(ty, &parsed.source)
    }

    #[test]
    fn test_plain_identifier() {
        assert_eq!(resolve_param_type("int64"), "int64");
        assert_eq!(resolve_param_type("User"), "User");
    }

    #[test]
    fn test_empty_interface() {
        assert_eq!(resolve_param_type("interface{}"), "interface{}");
    }

    #[test]
    fn test_interface_with_methods_unsupported() {
        assert_eq!(resolve_param_type("interface{ Close() error }"), "");
    }

    #[test]
    fn test_pointer_is_dropped() {
        assert_eq!(resolve_param_type("*User"), "User");
        assert_eq!(resolve_param_type("**User"), "User");
    }

    #[test]
    fn test_slice_and_array() {
        assert_eq!(resolve_param_type("[]string"), "[]string");
        assert_eq!(resolve_param_type("[4]byte"), "[]byte");
        assert_eq!(resolve_param_type("[]*User"), "[]User");
    }

    #[test]
    fn test_map() {
        assert_eq!(resolve_param_type("map[string]int"), "map[string]int");
        assert_eq!(
            resolve_param_type("map[string][]int64"),
            "map[string][]int64"
        );
    }

    #[test]
    fn test_slice_of_map_round_trip() {
        assert_eq!(
            resolve_param_type("[]map[string]int"),
            "[]map[string]int"
        );
    }

    #[test]
    fn test_qualified_type() {
        assert_eq!(resolve_param_type("app.Context"), "app.Context");
        assert_eq!(resolve_param_type("*app.Context"), "app.Context");
        assert_eq!(resolve_param_type("[]app.User"), "[]app.User");
    }

    #[test]
    fn test_unsupported_shapes_degrade_to_empty() {
        assert_eq!(resolve_param_type("chan int"), "");
        assert_eq!(resolve_param_type("func(int) error"), "");
        assert_eq!(resolve_param_type("struct{ X int }"), "");
    }
}
