//! Core types for dirgest.
//!
//! This crate provides the data model shared across the dirgest workspace:
//! the immutable scan [`Query`], the [`FileNode`] tree with aggregate
//! file/directory counts, the flattened [`FileRecord`] output, and the
//! error taxonomy.

mod error;
mod node;
mod query;
mod record;
mod tree;

pub use error::{IngestError, ScanWarning, WarningKind};
pub use node::{FileNode, NodeKind};
pub use query::{DEFAULT_MAX_FILE_SIZE, Query, QueryBuilder};
pub use record::{FileRecord, NON_TEXT_PLACEHOLDER};
pub use tree::{FileTree, TreeStats};

// Re-export the pattern types queries are built with.
pub use dirgest_match::{PatternError, PatternMode};
