//! Error types and recoverable-warning records for scanning.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use dirgest_match::PatternError;

/// Fatal errors that abort a scan before or during traversal.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Root or subpath does not exist.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Root path resolves to a non-directory.
    #[error("Root path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// A malformed pattern, rejected before any traversal begins.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] PatternError),

    /// Generic I/O error with path context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    /// Create an I/O error with path context, mapping not-found onto the
    /// dedicated variant.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Kind of recovered error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// Permission was denied; the subtree was recorded as empty.
    PermissionDenied,
    /// Error reading a directory or file.
    ReadError,
    /// Error reading metadata for an entry.
    MetadataError,
}

/// Non-fatal problem encountered during a scan. Recovered errors never
/// change the shape of the result beyond the affected subtree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanWarning {
    /// Path where the problem occurred.
    pub path: PathBuf,
    /// Human-readable message.
    pub message: String,
    /// Kind of warning.
    pub kind: WarningKind,
}

impl ScanWarning {
    /// Create a new scan warning.
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            kind,
        }
    }

    /// Create a permission denied warning.
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            message: format!("Permission denied: {}", path.display()),
            path,
            kind: WarningKind::PermissionDenied,
        }
    }

    /// Create a read error warning.
    pub fn read_error(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        let path = path.into();
        Self {
            message: format!("Read error: {error}"),
            path,
            kind: WarningKind::ReadError,
        }
    }

    /// Create a metadata error warning.
    pub fn metadata_error(path: impl Into<PathBuf>, error: &std::io::Error) -> Self {
        let path = path.into();
        Self {
            message: format!("Metadata error: {error}"),
            path,
            kind: WarningKind::MetadataError,
        }
    }
}
