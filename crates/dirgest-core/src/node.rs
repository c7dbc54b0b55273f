//! File and directory node types.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// Type of file system node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Regular file.
    File,
    /// Directory.
    Directory {
        /// Total number of files in this subtree.
        file_count: u64,
        /// Total number of directories in this subtree.
        dir_count: u64,
    },
    /// Symbolic link. Never followed; recorded as a size-zero leaf.
    Symlink,
}

impl NodeKind {
    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, NodeKind::Directory { .. })
    }

    /// Check if this is a regular file.
    pub fn is_file(&self) -> bool {
        matches!(self, NodeKind::File)
    }

    /// Check if this is a symlink.
    pub fn is_symlink(&self) -> bool {
        matches!(self, NodeKind::Symlink)
    }
}

/// A single entry in the scanned tree. Nodes are built bottom-up by the
/// scanner and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileNode {
    /// File/directory name (not full path).
    pub name: CompactString,

    /// Path relative to the scan root, `/`-separated, no leading slash.
    /// Empty for the scan root itself; unique within one scan result.
    pub path: CompactString,

    /// Node type and associated counts.
    pub kind: NodeKind,

    /// Size in bytes (aggregate for directories, zero for symlinks).
    pub size: u64,

    /// Depth below the scan root (root is 0).
    pub depth: u32,

    /// Children nodes (directories only), in directory-listing order.
    pub children: Vec<FileNode>,
}

impl FileNode {
    /// Create a new file node.
    pub fn new_file(
        name: impl Into<CompactString>,
        path: impl Into<CompactString>,
        size: u64,
        depth: u32,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: NodeKind::File,
            size,
            depth,
            children: Vec::new(),
        }
    }

    /// Create a new directory node with zeroed counts.
    pub fn new_directory(
        name: impl Into<CompactString>,
        path: impl Into<CompactString>,
        depth: u32,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: NodeKind::Directory {
                file_count: 0,
                dir_count: 0,
            },
            size: 0,
            depth,
            children: Vec::new(),
        }
    }

    /// Create a skipped-symlink leaf.
    pub fn new_symlink(
        name: impl Into<CompactString>,
        path: impl Into<CompactString>,
        depth: u32,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: NodeKind::Symlink,
            size: 0,
            depth,
            children: Vec::new(),
        }
    }

    /// Check if this node is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Check if this node is a file.
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    /// Get the number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Subtree file count for directories, 1 for files, 0 for symlinks.
    pub fn file_count(&self) -> u64 {
        match &self.kind {
            NodeKind::Directory { file_count, .. } => *file_count,
            NodeKind::File => 1,
            NodeKind::Symlink => 0,
        }
    }

    /// Subtree directory count for directories, 0 otherwise.
    pub fn dir_count(&self) -> u64 {
        match &self.kind {
            NodeKind::Directory { dir_count, .. } => *dir_count,
            _ => 0,
        }
    }
}
