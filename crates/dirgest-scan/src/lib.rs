//! Directory scanning and content extraction for dirgest.
//!
//! This crate walks a root directory depth-first, consults the pattern
//! filter for every entry, and builds an immutable [`FileTree`] with
//! aggregate file/directory counts. A separate extraction pass flattens
//! the tree into [`FileRecord`]s with content loaded up to a size cap.
//!
//! # Example
//!
//! ```rust,no_run
//! use dirgest_scan::{extract_tree, DirectoryScanner, Query};
//!
//! let query = Query::new("/path/to/repo");
//! let tree = DirectoryScanner::new().scan(&query).unwrap();
//! let records = extract_tree(&tree);
//!
//! println!("{} files, {} directories", tree.total_files(), tree.total_dirs());
//! println!("{} records extracted", records.len());
//! ```

mod extract;
mod scanner;

pub use extract::{extract_files, extract_tree};
pub use scanner::DirectoryScanner;

// Re-export core types for convenience.
pub use dirgest_core::{
    FileNode, FileRecord, FileTree, IngestError, NodeKind, PatternError, PatternMode, Query,
    ScanWarning, TreeStats, WarningKind, NON_TEXT_PLACEHOLDER,
};
