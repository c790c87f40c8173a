//! Interface signature extraction using tree-sitter
//!
//! Locates a named interface declaration in Go source and enumerates
//! its method set with canonical parameter and result type strings.

use super::{MethodSignature, Param, SignatureMap, TypeExpr};
use crate::error::{Error, Result};
use tracing::debug;
use tree_sitter::{Node, Point};

/// Extracts interface signature maps from Go source text
pub struct InterfaceExtractor {
    parser: tree_sitter::Parser,
}

impl InterfaceExtractor {
    /// Create a new extractor with the Go grammar loaded
    pub fn new() -> Result<Self> {
        let mut parser = tree_sitter::Parser::new();
        parser.set_language(&tree_sitter_go::LANGUAGE.into())?;

        Ok(Self { parser })
    }

    /// Build the signature map for `interface_name` from Go source text.
    ///
    /// `origin` labels the input in error messages (a file path, or a
    /// synthetic-unit marker for documentation blocks).
    pub fn extract(
        &mut self,
        origin: &str,
        source: &str,
        interface_name: &str,
    ) -> Result<SignatureMap> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| Error::parse(origin, "failed to parse Go source"))?;

        let root = tree.root_node();
        if root.has_error() {
            let point = first_syntax_error(root).unwrap_or_else(|| root.start_position());
            return Err(Error::parse(
                origin,
                format!(
                    "syntax error at line {}, column {}",
                    point.row + 1,
                    point.column + 1
                ),
            ));
        }

        let spec = find_type_spec(root, source, interface_name)
            .ok_or_else(|| Error::InterfaceNotFound(interface_name.to_string()))?;

        let body = spec
            .child_by_field_name("type")
            .filter(|ty| ty.kind() == "interface_type")
            .ok_or_else(|| Error::NotAnInterface(interface_name.to_string()))?;

        let map = extract_methods(body, source);
        debug!(
            interface = interface_name,
            origin,
            methods = map.len(),
            "extracted signature map"
        );

        Ok(map)
    }
}

/// Find the top-level `type_spec` whose name matches, searching grouped
/// `type ( ... )` declarations as well
fn find_type_spec<'tree>(
    root: Node<'tree>,
    source: &str,
    interface_name: &str,
) -> Option<Node<'tree>> {
    let mut cursor = root.walk();
    for child in root.children(&mut cursor) {
        if child.kind() != "type_declaration" {
            continue;
        }

        let mut spec_cursor = child.walk();
        for spec in child.children(&mut spec_cursor) {
            if spec.kind() != "type_spec" {
                continue;
            }
            let name = spec
                .child_by_field_name("name")
                .and_then(|n| n.utf8_text(source.as_bytes()).ok());
            if name == Some(interface_name) {
                return Some(spec);
            }
        }
    }
    None
}

/// Enumerate the methods of an `interface_type` body in declaration
/// order. Embedded interface members carry no signature of their own
/// and are skipped; they still occupy a declaration slot.
fn extract_methods(body: Node, source: &str) -> SignatureMap {
    let mut map = SignatureMap::new();
    let mut index = 0;

    let mut cursor = body.walk();
    for member in body.named_children(&mut cursor) {
        match member.kind() {
            // tree-sitter-go renamed method_spec to method_elem with the
            // Go 1.18 grammar update; accept both
            "method_elem" | "method_spec" => {
                if let Some(method) = extract_method(member, source, index) {
                    map.insert(method);
                }
                index += 1;
            }
            "type_elem" => {
                debug!(index, "skipping embedded interface member");
                index += 1;
            }
            _ => {}
        }
    }

    map
}

/// Build one signature from a method member; members without a name
/// are malformed and yield nothing
fn extract_method(node: Node, source: &str, index: usize) -> Option<MethodSignature> {
    let name = node
        .child_by_field_name("name")?
        .utf8_text(source.as_bytes())
        .ok()?;

    let params = node
        .child_by_field_name("parameters")
        .map(|list| extract_params(list, source))
        .unwrap_or_default();

    let results = node
        .child_by_field_name("result")
        .map(|result| extract_results(result, source))
        .unwrap_or_default();

    Some(MethodSignature {
        name: name.to_string(),
        params,
        results,
        index,
    })
}

/// One `Param` per parameter declaration; `a, b int` stays a single
/// declaration binding two names
fn extract_params(list: Node, source: &str) -> Vec<Param> {
    let mut params = Vec::new();

    let mut cursor = list.walk();
    for decl in list.named_children(&mut cursor) {
        match decl.kind() {
            "parameter_declaration" => {
                let ty = decl
                    .child_by_field_name("type")
                    .map(|n| TypeExpr::resolve(n, source))
                    .unwrap_or_default();
                params.push(Param {
                    names: bound_names(decl, source),
                    ty,
                });
            }
            "variadic_parameter_declaration" => {
                // `...T` is recognized but never resolved
                params.push(Param {
                    names: bound_names(decl, source),
                    ty: String::new(),
                });
            }
            _ => {}
        }
    }

    params
}

/// A bare result type yields one entry; a parenthesized result list
/// yields one entry per declaration, ignoring any result names
fn extract_results(result: Node, source: &str) -> Vec<String> {
    if result.kind() != "parameter_list" {
        return vec![TypeExpr::resolve(result, source)];
    }

    let mut results = Vec::new();
    let mut cursor = result.walk();
    for decl in result.named_children(&mut cursor) {
        if matches!(
            decl.kind(),
            "parameter_declaration" | "variadic_parameter_declaration"
        ) {
            let ty = decl
                .child_by_field_name("type")
                .map(|n| TypeExpr::resolve(n, source))
                .unwrap_or_default();
            results.push(ty);
        }
    }
    results
}

fn bound_names(decl: Node, source: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut cursor = decl.walk();
    for name in decl.children_by_field_name("name", &mut cursor) {
        if let Ok(text) = name.utf8_text(source.as_bytes()) {
            names.push(text.to_string());
        }
    }
    names
}

/// Position of the first error or missing node in the tree
fn first_syntax_error(node: Node) -> Option<Point> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position());
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(point) = first_syntax_error(child) {
            return Some(point);
        }
    }
    None
}
