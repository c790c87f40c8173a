//! Canonical type strings for Go type-expression nodes
//!
//! Interface signatures are compared as strings, so every type
//! expression is first folded into a closed set of recognized forms.
//! Anything outside that set (maps, channels, function types, generic
//! instantiations, variadics) becomes `Unresolved` and renders as the
//! empty string. Two unresolved types therefore compare equal even when
//! the underlying source differs; this is a documented limitation of
//! the comparison, not an error.

use std::fmt;
use tree_sitter::Node;

/// A recognized Go type expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// Plain identifier, e.g. `int`, `error`, `User`
    Ident(String),
    /// The anonymous empty interface, `interface{}`
    EmptyInterface,
    /// Slice or array of an element type; both render as `[]T`
    Slice(Box<TypeExpr>),
    /// Pointer to a pointee type, `*T`
    Pointer(Box<TypeExpr>),
    /// Package-qualified name, `pkg.Name`
    Qualified(Box<TypeExpr>, String),
    /// Any node kind outside the recognized set
    Unresolved,
}

impl TypeExpr {
    /// Fold a tree-sitter type node into a recognized form
    pub fn from_node(node: Node, source: &str) -> Self {
        match node.kind() {
            "type_identifier" | "identifier" | "package_identifier" => {
                match node.utf8_text(source.as_bytes()) {
                    Ok(text) => TypeExpr::Ident(text.to_string()),
                    Err(_) => TypeExpr::Unresolved,
                }
            }
            "interface_type" => {
                if node.named_child_count() == 0 {
                    TypeExpr::EmptyInterface
                } else {
                    TypeExpr::Unresolved
                }
            }
            "slice_type" | "array_type" => match node.child_by_field_name("element") {
                Some(element) => TypeExpr::Slice(Box::new(Self::from_node(element, source))),
                None => TypeExpr::Unresolved,
            },
            "pointer_type" => match node.named_child(0) {
                Some(pointee) => TypeExpr::Pointer(Box::new(Self::from_node(pointee, source))),
                None => TypeExpr::Unresolved,
            },
            "qualified_type" => {
                let package = node.child_by_field_name("package");
                let name = node
                    .child_by_field_name("name")
                    .and_then(|n| n.utf8_text(source.as_bytes()).ok());
                match (package, name) {
                    (Some(package), Some(name)) => TypeExpr::Qualified(
                        Box::new(Self::from_node(package, source)),
                        name.to_string(),
                    ),
                    _ => TypeExpr::Unresolved,
                }
            }
            _ => TypeExpr::Unresolved,
        }
    }

    /// Resolve a node straight to its canonical string
    pub fn resolve(node: Node, source: &str) -> String {
        Self::from_node(node, source).to_string()
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Ident(name) => write!(f, "{}", name),
            TypeExpr::EmptyInterface => write!(f, "interface{{}}"),
            TypeExpr::Slice(element) => write!(f, "[]{}", element),
            TypeExpr::Pointer(pointee) => write!(f, "*{}", pointee),
            TypeExpr::Qualified(package, name) => write!(f, "{}.{}", package, name),
            TypeExpr::Unresolved => Ok(()),
        }
    }
}
