//! Error types for catalog repairs.
//!
//! Every failure an operation can hit is expressed here so the binaries can
//! report it once and exit non-zero, instead of letting a raw fault escape.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The kind of catalog record a lookup was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    RootFolder,
    Collection,
    ParentCollection,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::RootFolder => write!(f, "root folder"),
            RecordKind::Collection => write!(f, "collection"),
            RecordKind::ParentCollection => write!(f, "parent collection"),
        }
    }
}

/// Main error type for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    // Lookup errors
    #[error("No {kind} found with the name '{name}'")]
    NotFound { kind: RecordKind, name: String },

    #[error("Found {count} records for {kind} '{name}', expected exactly 1")]
    Ambiguous {
        kind: RecordKind,
        name: String,
        count: usize,
    },

    // Mutation guards
    #[error("Target path '{}' does not exist", path.display())]
    InvalidTarget { path: PathBuf },

    #[error("Collection '{name}' is a default collection and cannot be moved")]
    ProtectedNode { name: String },

    // Database errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: Option<rusqlite::Error>,
    },

    // File system errors
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    // Argument validation
    #[error("Validation error for {field}: {message}")]
    Validation { field: String, message: String },

    // Generic errors
    #[error("{0}")]
    Other(String),
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io {
            message: err.to_string(),
            path: None,
            source: Some(err),
        }
    }
}

impl From<rusqlite::Error> for CatalogError {
    fn from(err: rusqlite::Error) -> Self {
        CatalogError::Database {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl CatalogError {
    /// True for failures caused by the caller's input rather than the
    /// catalog or the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            CatalogError::NotFound { .. }
                | CatalogError::Ambiguous { .. }
                | CatalogError::InvalidTarget { .. }
                | CatalogError::ProtectedNode { .. }
                | CatalogError::Validation { .. }
        )
    }
}
