//! Scanned tree container and statistics.

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

use crate::error::ScanWarning;
use crate::node::FileNode;
use crate::query::Query;

/// Summary statistics for a scanned tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeStats {
    /// Total size in bytes of included files.
    pub total_size: u64,
    /// Total number of included files.
    pub total_files: u64,
    /// Total number of traversed directories (excluding the root).
    pub total_dirs: u64,
    /// Total number of symlink leaves recorded.
    pub total_symlinks: u64,
    /// Maximum depth reached below the root.
    pub max_depth: u32,
}

impl TreeStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an included file.
    pub fn record_file(&mut self, size: u64, depth: u32) {
        self.total_files += 1;
        self.total_size += size;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Record a traversed directory.
    pub fn record_dir(&mut self, depth: u32) {
        self.total_dirs += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Record a skipped symlink.
    pub fn record_symlink(&mut self) {
        self.total_symlinks += 1;
    }
}

/// Complete scan result: the node tree plus scan metadata. Discarded after
/// extraction; nothing is cached across invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileTree {
    /// Root node of the tree.
    pub root: FileNode,

    /// Resolved absolute path that was scanned.
    pub root_path: PathBuf,

    /// When this scan was performed.
    pub scanned_at: SystemTime,

    /// Duration of the scan.
    pub scan_duration: Duration,

    /// Query the scan was performed with.
    pub query: Query,

    /// Summary statistics.
    pub stats: TreeStats,

    /// Recovered errors encountered during the scan.
    pub warnings: Vec<ScanWarning>,
}

impl FileTree {
    /// Create a new file tree.
    pub fn new(
        root: FileNode,
        root_path: PathBuf,
        query: Query,
        stats: TreeStats,
        scan_duration: Duration,
        warnings: Vec<ScanWarning>,
    ) -> Self {
        Self {
            root,
            root_path,
            scanned_at: SystemTime::now(),
            scan_duration,
            query,
            stats,
            warnings,
        }
    }

    /// Total size in bytes of included files.
    pub fn total_size(&self) -> u64 {
        self.stats.total_size
    }

    /// Total number of included files.
    pub fn total_files(&self) -> u64 {
        self.stats.total_files
    }

    /// Total number of traversed directories.
    pub fn total_dirs(&self) -> u64 {
        self.stats.total_dirs
    }

    /// Check if there were any warnings during scanning.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
