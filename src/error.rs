//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ifacediff operations
#[derive(Debug, Error)]
pub enum Error {
    /// An input file could not be read
    #[error("failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Go source (real or synthetic) failed to parse
    #[error("parse error in {file}: {message}")]
    Parse { file: String, message: String },

    /// No top-level type declaration with the requested name exists
    #[error("interface `{0}` not found")]
    InterfaceNotFound(String),

    /// The named type exists but its underlying type is not an interface
    #[error("type `{0}` is not an interface")]
    NotAnInterface(String),

    /// The tree-sitter grammar could not be loaded
    #[error("failed to load Go grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a file read error with path context
    pub fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error for the named input
    pub fn parse(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            file: file.into(),
            message: message.into(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
