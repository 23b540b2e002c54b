//! Error types
//!
//! Generation errors abort the whole pass. Access errors belong to a single
//! accessor call and leave the context untouched.

use std::path::PathBuf;
use thiserror::Error;

/// Failure while building accessors from a sample document
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to read sample file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("Identifier '{identifier}' derived from both '{first}' and '{second}'")]
    IdentifierCollision {
        identifier: String,
        first: String,
        second: String,
    },
}

/// Failure of one accessor call against a runtime document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("Missing key: {0}")]
    MissingKey(String),

    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    #[error("Invalid path: segment '{segment}' cannot be applied to {found}")]
    InvalidPath { segment: String, found: &'static str },

    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: String,
        actual: &'static str,
    },
}
