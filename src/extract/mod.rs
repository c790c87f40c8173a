//! Signature extraction module
//!
//! This module handles building method signature maps from:
//! - Go source files (using tree-sitter)
//! - Fenced code blocks in Markdown documentation (using pulldown-cmark)

pub mod code;
pub mod doc;
pub mod typeexpr;

pub use code::InterfaceExtractor;
pub use doc::{synthetic_unit, SyntheticUnit, GO_LANGUAGE_TAG};
pub use typeexpr::TypeExpr;

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// One parameter declaration of a method
///
/// A single declaration may bind several names to one type (`a, b int`).
/// An empty names list is an unnamed parameter; it still contributes its
/// type to the signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    pub names: Vec<String>,
    /// Canonical type string; empty when the type form is unresolved
    pub ty: String,
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.names.is_empty() {
            return write!(f, "{}", self.ty);
        }
        write!(f, "{}", self.names.join(", "))?;
        if !self.ty.is_empty() {
            write!(f, " {}", self.ty)?;
        }
        Ok(())
    }
}

/// A single method signature extracted from an interface declaration
#[derive(Debug, Clone, Eq, Serialize)]
pub struct MethodSignature {
    /// Method name, unique within one interface
    pub name: String,
    /// Parameter declarations in source order
    pub params: Vec<Param>,
    /// Result type strings in source order
    pub results: Vec<String>,
    /// Position among the interface's methods; display ordering only
    pub index: usize,
}

/// Equality deliberately ignores `index`: two methods declared at
/// different positions still compare equal.
impl PartialEq for MethodSignature {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.params == other.params && self.results == other.results
    }
}

impl fmt::Display for MethodSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<String> = self.params.iter().map(|p| p.to_string()).collect();
        write!(f, "{}({})", self.name, params.join(", "))?;

        match self.results.len() {
            0 => Ok(()),
            1 => write!(f, " {}", self.results[0]),
            _ => write!(f, " ({})", self.results.join(", ")),
        }
    }
}

/// Mapping from method name to signature, built from exactly one
/// interface declaration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignatureMap {
    methods: HashMap<String, MethodSignature>,
}

impl SignatureMap {
    /// Create an empty map (the degraded documentation-side result)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, method: MethodSignature) {
        self.methods.insert(method.name.clone(), method);
    }

    pub fn get(&self, name: &str) -> Option<&MethodSignature> {
        self.methods.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Method names in arbitrary map order; callers needing determinism
    /// must sort
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.methods.keys()
    }

    /// Signatures sorted by declaration index
    pub fn sorted_by_index(&self) -> Vec<&MethodSignature> {
        let mut methods: Vec<&MethodSignature> = self.methods.values().collect();
        methods.sort_by_key(|m| m.index);
        methods
    }
}
