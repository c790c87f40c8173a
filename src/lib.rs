//! IfaceDiff - README interface drift checker
//!
//! This library provides the core functionality for verifying that a
//! Go interface restated in Markdown documentation still matches the
//! authoritative declaration in source code.

pub mod cli;
pub mod diff;
pub mod error;
pub mod extract;

/// Re-export commonly used types
pub use diff::{diff, Discrepancy};
pub use error::{Error, Result};
pub use extract::{InterfaceExtractor, MethodSignature, Param, SignatureMap, SyntheticUnit};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "ifacediff";
