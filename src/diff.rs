//! Signature diff engine
//!
//! Compares the actual and documented signature maps and reports every
//! method that mismatches or is missing on either side. Matching
//! methods produce no record.

use crate::extract::{MethodSignature, SignatureMap};
use serde::Serialize;
use tracing::debug;

/// One unit of diff output for a single method
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discrepancy {
    /// Present in both with differing signatures
    Mismatch {
        name: String,
        actual: MethodSignature,
        documented: MethodSignature,
    },
    /// Present only in the actual interface
    MissingFromDocs {
        name: String,
        actual: MethodSignature,
    },
    /// Present only in the documentation
    MissingFromSource {
        name: String,
        documented: MethodSignature,
    },
}

impl Discrepancy {
    /// The method this record is about
    pub fn method_name(&self) -> &str {
        match self {
            Discrepancy::Mismatch { name, .. }
            | Discrepancy::MissingFromDocs { name, .. }
            | Discrepancy::MissingFromSource { name, .. } => name,
        }
    }

    /// Rendered signature on the source side, empty when absent
    pub fn actual_rendered(&self) -> String {
        match self {
            Discrepancy::Mismatch { actual, .. } | Discrepancy::MissingFromDocs { actual, .. } => {
                actual.to_string()
            }
            Discrepancy::MissingFromSource { .. } => String::new(),
        }
    }

    /// Rendered signature on the documentation side, empty when absent
    pub fn documented_rendered(&self) -> String {
        match self {
            Discrepancy::Mismatch { documented, .. }
            | Discrepancy::MissingFromSource { documented, .. } => documented.to_string(),
            Discrepancy::MissingFromDocs { .. } => String::new(),
        }
    }
}

/// Compare the two maps and return discrepancy records.
///
/// Records for methods present in the actual interface come first,
/// then documentation-only methods; each group is sorted by method
/// name so output is deterministic regardless of map iteration order.
pub fn diff(actual: &SignatureMap, documented: &SignatureMap) -> Vec<Discrepancy> {
    let mut records = Vec::new();

    let mut actual_names: Vec<&String> = actual.names().collect();
    actual_names.sort();

    for name in actual_names {
        let signature = actual.get(name).expect("name taken from this map");
        match documented.get(name) {
            Some(documented_signature) if documented_signature != signature => {
                records.push(Discrepancy::Mismatch {
                    name: name.clone(),
                    actual: signature.clone(),
                    documented: documented_signature.clone(),
                });
            }
            Some(_) => {}
            None => {
                records.push(Discrepancy::MissingFromDocs {
                    name: name.clone(),
                    actual: signature.clone(),
                });
            }
        }
    }

    let mut documented_names: Vec<&String> = documented.names().collect();
    documented_names.sort();

    for name in documented_names {
        if !actual.contains(name) {
            let signature = documented.get(name).expect("name taken from this map");
            records.push(Discrepancy::MissingFromSource {
                name: name.clone(),
                documented: signature.clone(),
            });
        }
    }

    debug!(records = records.len(), "signature diff complete");

    records
}
